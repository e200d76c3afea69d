/*!
 * Process Types
 * Per-process records owned by the scheduling engine
 */

use crate::core::types::{Pid, Ticks, Tickets};
use serde::{Deserialize, Serialize};

/// Process lifecycle within a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival time not yet reached
    Pending,
    /// Admitted to the ready queue, waiting for a lottery win
    Ready,
    /// Holding the CPU for the current round
    Running,
    /// Remaining time reached zero
    Finished,
}

/// Process record
///
/// Static fields come from the workload; the rest is mutated by the engine
/// as the simulation advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    pub wait_time: Ticks,
    pub exit_time: Option<Ticks>,
    pub tickets: Tickets,
    pub is_short_job: bool,
    pub state: ProcessState,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(id: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            wait_time: 0,
            exit_time: None,
            tickets: 0,
            is_short_job: false,
            state: ProcessState::Pending,
        }
    }

    /// Lottery weight: tickets plus accumulated wait (aging)
    #[inline(always)]
    #[must_use]
    pub const fn weight(&self) -> Tickets {
        self.tickets + self.wait_time
    }

    /// Turnaround as burst plus total wait
    #[inline]
    #[must_use]
    pub const fn turnaround_time(&self) -> Ticks {
        self.burst_time + self.wait_time
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, ProcessState::Finished)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, ProcessState::Pending)
    }

    /// Admit to the ready queue at `now`, resetting wait to time since arrival
    pub(crate) fn admit(&mut self, now: Ticks) {
        debug_assert!(self.is_pending(), "process {} admitted twice", self.id);
        self.wait_time = now.saturating_sub(self.arrival_time);
        self.state = ProcessState::Ready;
    }

    /// Run for one second; returns true once the burst is exhausted
    pub(crate) fn run_one(&mut self) -> bool {
        debug_assert!(self.remaining_time > 0);
        self.remaining_time -= 1;
        self.remaining_time == 0
    }

    pub(crate) fn finish(&mut self, now: Ticks) {
        debug_assert!(self.exit_time.is_none(), "process {} finished twice", self.id);
        self.exit_time = Some(now);
        self.state = ProcessState::Finished;
    }
}
