/*!
 * Simulation Statistics
 * Turnaround and waiting time aggregates over a finished process list
 */

use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use serde::Serialize;
use std::fmt;

/// Final timings of one process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessOutcome {
    pub id: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub exit_time: Option<Ticks>,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
}

impl From<&Process> for ProcessOutcome {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            exit_time: p.exit_time,
            turnaround_time: p.turnaround_time(),
            waiting_time: p.wait_time,
        }
    }
}

/// Aggregate statistics
///
/// All zero when there were no processes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub process_count: usize,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    pub max_turnaround: Ticks,
    pub max_waiting: Ticks,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self::default();
        }

        let count = outcomes.len();
        let total_turnaround: Ticks = outcomes.iter().map(|o| o.turnaround_time).sum();
        let total_waiting: Ticks = outcomes.iter().map(|o| o.waiting_time).sum();

        Self {
            process_count: count,
            average_turnaround: total_turnaround as f64 / count as f64,
            average_waiting: total_waiting as f64 / count as f64,
            max_turnaround: outcomes.iter().map(|o| o.turnaround_time).max().unwrap_or(0),
            max_waiting: outcomes.iter().map(|o| o.waiting_time).max().unwrap_or(0),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.process_count == 0
    }
}

/// Per-process table plus aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: Summary,
    /// Ordered by process id
    pub processes: Vec<ProcessOutcome>,
}

impl Report {
    pub fn from_processes(processes: &[Process]) -> Self {
        let mut outcomes: Vec<ProcessOutcome> = processes.iter().map(ProcessOutcome::from).collect();
        outcomes.sort_by_key(|o| o.id);

        Self {
            summary: Summary::from_outcomes(&outcomes),
            processes: outcomes,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No processes to schedule")?;
        }
        writeln!(f, "Average turnaround time: {:.2}", self.average_turnaround)?;
        writeln!(f, "Average waiting time: {:.2}", self.average_waiting)?;
        writeln!(f, "Maximum turnaround time: {}", self.max_turnaround)?;
        write!(f, "Maximum waiting time: {}", self.max_waiting)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.processes.is_empty() {
            writeln!(
                f,
                "Process Number   Arrival Time   Burst Time   Exit Time   Turnaround Time   Waiting Time"
            )?;
            for o in &self.processes {
                let exit = o.exit_time.map_or_else(|| "-".to_string(), |t| t.to_string());
                writeln!(
                    f,
                    "{:>14}   {:>12}   {:>10}   {:>9}   {:>15}   {:>12}",
                    o.id, o.arrival_time, o.burst_time, exit, o.turnaround_time, o.waiting_time
                )?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.summary)
    }
}
