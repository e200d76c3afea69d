/*!
 * Scheduler Limits and Constants
 *
 * Centralized location for ticket weights, slice bounds and workload
 * generator defaults.
 */

use super::types::{Ticks, Tickets};

// =============================================================================
// TICKET ALLOCATION
// =============================================================================

/// Tickets held by a job at or below the round's average remaining time
pub const SHORT_JOB_TICKETS: Tickets = 10;

/// Tickets held by a job above the round's average remaining time
/// Never zero, so every queued process stays drawable
pub const LONG_JOB_TICKETS: Tickets = 1;

// =============================================================================
// TIME SLICE
// =============================================================================

/// Lower bound on a round's time slice (seconds)
/// A floor-divided average of 0 would otherwise run an empty round forever
pub const MIN_TIME_SLICE: Ticks = 1;

// =============================================================================
// WORKLOAD GENERATOR
// =============================================================================

/// Fewest processes in a generated workload
pub const GEN_MIN_PROCESSES: usize = 1;

/// Most processes in a generated workload
pub const GEN_MAX_PROCESSES: usize = 50;

/// Earliest generated arrival time
pub const GEN_MIN_ARRIVAL: Ticks = 0;

/// Latest generated arrival time
pub const GEN_MAX_ARRIVAL: Ticks = 50;

/// Shortest generated burst
pub const GEN_MIN_BURST: Ticks = 1;

/// Longest generated burst
pub const GEN_MAX_BURST: Ticks = 50;
