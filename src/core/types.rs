/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (1-based, assigned in workload order)
pub type Pid = u32;

/// Simulated time in whole seconds
pub type Ticks = u64;

/// Lottery ticket count
pub type Tickets = u64;
