/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Ticks;
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Workload loading result
pub type WorkloadResult<T> = Result<T, WorkloadError>;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Top-level result
pub type LotteryResult<T> = Result<T, LotteryError>;

/// Workload parsing errors
///
/// Line numbers are 1-based and refer to the input stream.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum WorkloadError {
    #[error("Failed to read workload: {0}")]
    #[diagnostic(
        code(workload::io),
        help("Check that the workload file exists and is readable.")
    )]
    Io(String),

    #[error("Line {line}: expected 2 fields (arrival_time burst_time), found {found}")]
    #[diagnostic(
        code(workload::field_count),
        help("Each line must hold exactly two whitespace-separated integers. Blank lines are not allowed.")
    )]
    FieldCount { line: usize, found: usize },

    #[error("Line {line}: {field} '{value}' is not a non-negative integer")]
    #[diagnostic(
        code(workload::invalid_integer),
        help("Arrival and burst times are whole seconds (0, 1, 2, ...).")
    )]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: burst time must be at least 1")]
    #[diagnostic(
        code(workload::zero_burst),
        help("A process needs at least one second of CPU time.")
    )]
    ZeroBurst { line: usize },

    #[error("Invalid generator bounds: {0}")]
    #[diagnostic(
        code(workload::invalid_bounds),
        help("Each minimum must not exceed its maximum, and bursts start at 1.")
    )]
    InvalidBounds(String),
}

impl From<std::io::Error> for WorkloadError {
    fn from(err: std::io::Error) -> Self {
        WorkloadError::Io(err.to_string())
    }
}

/// Scheduler errors
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Cannot hold a lottery on an empty ready queue")]
    #[diagnostic(
        code(scheduler::empty_queue),
        help("The engine only draws while processes are ready.")
    )]
    EmptyQueue,

    #[error("Ready queue holds no lottery weight")]
    #[diagnostic(
        code(scheduler::zero_weight),
        help("Every queued process needs at least one ticket. Check long_job_tickets.")
    )]
    ZeroWeight,

    #[error("Draw {draw} outside lottery range 1..={total}")]
    #[diagnostic(
        code(scheduler::draw_out_of_range),
        help("Draw sources must return a value between 1 and the total weight inclusive.")
    )]
    DrawOutOfRange { draw: Ticks, total: Ticks },

    #[error("Invalid scheduler configuration: {0}")]
    #[diagnostic(code(scheduler::invalid_config))]
    InvalidConfig(String),
}

/// Unified error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum LotteryError {
    #[error("Workload error: {0}")]
    #[diagnostic(transparent)]
    Workload(#[from] WorkloadError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(lottery::serialization))]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(code(lottery::io))]
    Io(#[from] std::io::Error),

    #[error("Usage: {0}")]
    #[diagnostic(
        code(lottery::usage),
        help("lottery [--seed N] [--json] <workload>\n       lottery generate [--seed N] [--count N] <path>")
    )]
    Usage(String),
}
