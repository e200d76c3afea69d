/*!
 * Ready Queue
 * Ordered set of admitted processes plus the admission cursor
 */

use crate::core::types::Ticks;
use crate::process::Process;
use std::collections::VecDeque;
use tracing::debug;

/// Ready queue over an arrival-sorted master list
///
/// Entries are indices into the master list. `cursor` marks the first
/// process not yet admitted; everything before it is queued or finished.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    entries: VecDeque<usize>,
    cursor: usize,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit every process sharing the earliest arrival time
    ///
    /// Returns that arrival time (the simulation start), or `None` for an
    /// empty workload.
    pub fn seed(&mut self, processes: &mut [Process]) -> Option<Ticks> {
        let start = processes.get(self.cursor)?.arrival_time;
        self.admit_arrivals(processes, start);
        Some(start)
    }

    /// Admit all processes with `arrival_time <= now`
    ///
    /// Each admitted process has its wait time overwritten with the time
    /// elapsed since its arrival. Returns whether anything was admitted.
    pub fn admit_arrivals(&mut self, processes: &mut [Process], now: Ticks) -> bool {
        let start = self.cursor;
        while let Some(process) = processes.get_mut(self.cursor) {
            if process.arrival_time > now {
                break;
            }
            process.admit(now);
            debug!(
                pid = process.id,
                arrival = process.arrival_time,
                now,
                wait = process.wait_time,
                "process admitted"
            );
            self.entries.push_back(self.cursor);
            self.cursor += 1;
        }
        self.cursor > start
    }

    /// Remove the entry at queue position `index`, keeping the others in order
    pub fn remove(&mut self, index: usize) -> Option<usize> {
        self.entries.remove(index)
    }

    /// Arrival time of the next process still waiting for admission
    pub fn next_arrival(&self, processes: &[Process]) -> Option<Ticks> {
        processes.get(self.cursor).map(|p| p.arrival_time)
    }

    /// Whether unadmitted processes remain
    #[inline]
    pub fn has_pending(&self, processes: &[Process]) -> bool {
        self.cursor < processes.len()
    }

    /// Master-list index of the entry at queue position `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.entries.get(index).copied()
    }

    /// Master-list indices in queue order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessState;

    fn workload(pairs: &[(Ticks, Ticks)]) -> Vec<Process> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(at, bt))| Process::new(i as u32 + 1, at, bt))
            .collect()
    }

    #[test]
    fn test_seed_admits_all_ties() {
        let mut processes = workload(&[(2, 5), (2, 3), (4, 1)]);
        let mut queue = ReadyQueue::new();

        assert_eq!(queue.seed(&mut processes), Some(2));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(queue.next_arrival(&processes), Some(4));
        assert_eq!(processes[2].state, ProcessState::Pending);
    }

    #[test]
    fn test_seed_empty_workload() {
        let mut queue = ReadyQueue::new();
        assert_eq!(queue.seed(&mut []), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_admit_sets_wait_since_arrival() {
        let mut processes = workload(&[(0, 5), (1, 3), (2, 2), (9, 1)]);
        let mut queue = ReadyQueue::new();
        queue.seed(&mut processes);

        assert!(queue.admit_arrivals(&mut processes, 3));
        assert_eq!(queue.len(), 3);
        assert_eq!(processes[1].wait_time, 2);
        assert_eq!(processes[2].wait_time, 1);
        assert!(queue.has_pending(&processes));
    }

    #[test]
    fn test_admit_never_readmits() {
        let mut processes = workload(&[(0, 5), (1, 3)]);
        let mut queue = ReadyQueue::new();
        queue.seed(&mut processes);

        assert!(queue.admit_arrivals(&mut processes, 1));
        assert!(!queue.admit_arrivals(&mut processes, 1));
        assert!(!queue.admit_arrivals(&mut processes, 50));
        assert_eq!(queue.len(), 2);
        assert!(!queue.has_pending(&processes));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut processes = workload(&[(0, 1), (0, 1), (0, 1), (0, 1)]);
        let mut queue = ReadyQueue::new();
        queue.seed(&mut processes);

        assert_eq!(queue.remove(1), Some(1));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(queue.remove(0), Some(0));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(queue.remove(5), None);
    }
}
