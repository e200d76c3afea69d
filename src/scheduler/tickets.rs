/*!
 * Ticket Allocation
 * Per-round short-job bias over the ready queue snapshot
 */

use super::config::SchedulerConfig;
use super::queue::ReadyQueue;
use crate::core::types::Ticks;
use crate::process::Process;
use serde::Serialize;

/// Outcome of one round's allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// Floor of the mean remaining time across the queue
    pub avg_remaining: Ticks,
    /// Seconds the round's winner may run
    pub time_slice: Ticks,
    pub short_jobs: usize,
}

/// Assign tickets to every queued process
///
/// Jobs at or below the mean remaining time are short and get
/// `short_job_tickets`; the rest get `long_job_tickets`. Returns `None`
/// for an empty queue.
pub fn allocate(
    queue: &ReadyQueue,
    processes: &mut [Process],
    config: &SchedulerConfig,
) -> Option<Allocation> {
    if queue.is_empty() {
        return None;
    }

    let total: Ticks = queue.iter().map(|i| processes[i].remaining_time).sum();
    let avg_remaining = total / queue.len() as Ticks;

    let mut short_jobs = 0;
    for i in queue.iter() {
        let process = &mut processes[i];
        process.is_short_job = process.remaining_time <= avg_remaining;
        process.tickets = if process.is_short_job {
            short_jobs += 1;
            config.short_job_tickets
        } else {
            config.long_job_tickets
        };
    }

    Some(Allocation {
        avg_remaining,
        time_slice: avg_remaining.max(config.min_time_slice),
        short_jobs,
    })
}
