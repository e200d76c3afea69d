/*!
 * Round Types
 * How a scheduling round ended and what it did
 */

use crate::core::types::{Pid, Ticks, Tickets};
use serde::{Deserialize, Serialize};

/// Why the winner gave up the CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceOutcome {
    /// Remaining time hit zero; the winner left the queue
    Completed,
    /// A new process was admitted mid-slice
    PreemptedByArrival,
    /// Ran the full slice; the winner goes back into contention
    SliceExhausted,
}

impl SliceOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::PreemptedByArrival => "preempted_by_arrival",
            Self::SliceExhausted => "slice_exhausted",
        }
    }
}

/// One allocate/draw/execute cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u64,
    pub started_at: Ticks,
    /// Process ids in queue order at draw time
    pub contenders: Vec<Pid>,
    pub avg_remaining: Ticks,
    pub time_slice: Ticks,
    pub total_weight: Tickets,
    pub draw: Tickets,
    pub winner: Pid,
    /// Seconds the winner actually ran
    pub ran_for: Ticks,
    pub outcome: SliceOutcome,
}

impl RoundRecord {
    pub fn ended_at(&self) -> Ticks {
        self.started_at + self.ran_for
    }
}
