/*!
 * Lottery Scheduler Library
 * Short-job-biased lottery CPU scheduling simulation
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod stats;
pub mod workload;

// Re-exports
pub use crate::core::errors::*;
pub use crate::core::types::{Pid, Ticks, Tickets};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessState};
pub use scheduler::{
    DrawSource, LotteryScheduler, RandomDraw, RoundRecord, SchedulerConfig, ScriptedDraw,
    Simulation, SliceOutcome,
};
pub use stats::{ProcessOutcome, Report, Summary};
pub use workload::{generate, load_workload, parse_workload, write_workload, GeneratorConfig};
