/*!
 * Core Module
 * Shared types, limits, and errors
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::{
    LotteryError, LotteryResult, SchedulerError, SchedulerResult, WorkloadError, WorkloadResult,
};
pub use types::{Pid, Ticks, Tickets};
