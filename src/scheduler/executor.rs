/*!
 * Time-Slice Execution
 * Second-by-second run of a round's winner with arrival preemption
 */

use super::lottery::DrawSource;
use super::round::SliceOutcome;
use super::LotteryScheduler;
use crate::core::types::Ticks;
use crate::process::ProcessState;

impl<D: DrawSource> LotteryScheduler<D> {
    /// Run the winner at queue `position` (master index `winner`) for up to
    /// `time_slice` seconds
    ///
    /// Completion is checked before arrival preemption, so a winner that
    /// finishes on the same second a newcomer arrives counts as completed.
    /// Returns the seconds actually run and why the round ended.
    pub(super) fn execute_slice(
        &mut self,
        position: usize,
        winner: usize,
        time_slice: Ticks,
    ) -> (Ticks, SliceOutcome) {
        self.processes[winner].state = ProcessState::Running;

        for sec in 1..=time_slice {
            let finished = self.processes[winner].run_one();
            self.clock += 1;

            for i in self.queue.iter() {
                if i != winner {
                    self.processes[i].wait_time += 1;
                }
            }

            let admitted = self.queue.admit_arrivals(&mut self.processes, self.clock);

            if finished {
                self.processes[winner].finish(self.clock);
                self.queue.remove(position);
                return (sec, SliceOutcome::Completed);
            }

            if admitted {
                self.processes[winner].state = ProcessState::Ready;
                return (sec, SliceOutcome::PreemptedByArrival);
            }
        }

        self.processes[winner].state = ProcessState::Ready;
        (time_slice, SliceOutcome::SliceExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Process;
    use crate::scheduler::lottery::ScriptedDraw;

    fn engine(pairs: &[(Ticks, Ticks)]) -> LotteryScheduler<ScriptedDraw> {
        let processes = pairs
            .iter()
            .enumerate()
            .map(|(i, &(at, bt))| Process::new(i as u32 + 1, at, bt))
            .collect();
        let mut engine = LotteryScheduler::new(processes, ScriptedDraw::constant(1));
        engine.seed();
        engine
    }

    #[test]
    fn test_slice_exhausted_keeps_winner_queued() {
        let mut engine = engine(&[(0, 10), (0, 4)]);
        let (ran, outcome) = engine.execute_slice(0, 0, 3);

        assert_eq!((ran, outcome), (3, SliceOutcome::SliceExhausted));
        assert_eq!(engine.clock(), 3);
        assert_eq!(engine.processes()[0].remaining_time, 7);
        assert_eq!(engine.processes()[0].wait_time, 0);
        assert_eq!(engine.processes()[1].wait_time, 3);
        assert_eq!(engine.queue_len(), 2);
    }

    #[test]
    fn test_completion_removes_winner() {
        let mut engine = engine(&[(0, 2), (0, 5)]);
        let (ran, outcome) = engine.execute_slice(0, 0, 3);

        assert_eq!((ran, outcome), (2, SliceOutcome::Completed));
        assert_eq!(engine.processes()[0].exit_time, Some(2));
        assert!(engine.processes()[0].is_finished());
        assert_eq!(engine.queue_len(), 1);
    }

    #[test]
    fn test_arrival_preempts_mid_slice() {
        let mut engine = engine(&[(0, 10), (3, 2)]);
        let (ran, outcome) = engine.execute_slice(0, 0, 10);

        assert_eq!((ran, outcome), (3, SliceOutcome::PreemptedByArrival));
        assert_eq!(engine.processes()[0].remaining_time, 7);
        assert_eq!(engine.processes()[0].state, ProcessState::Ready);
        assert_eq!(engine.processes()[1].wait_time, 0);
        assert_eq!(engine.queue_len(), 2);
    }

    #[test]
    fn test_completion_beats_arrival_on_same_second() {
        let mut engine = engine(&[(0, 3), (3, 2)]);
        let (ran, outcome) = engine.execute_slice(0, 0, 5);

        assert_eq!((ran, outcome), (3, SliceOutcome::Completed));
        assert_eq!(engine.queue_len(), 1);
        assert_eq!(engine.processes()[1].state, ProcessState::Ready);
    }

    #[test]
    fn test_newcomer_does_not_accrue_wait_on_admission_second() {
        let mut engine = engine(&[(0, 10), (0, 10), (2, 1)]);
        engine.execute_slice(1, 1, 4);

        // admitted at t=2 exactly on arrival
        assert_eq!(engine.processes()[2].wait_time, 0);
        assert_eq!(engine.processes()[0].wait_time, 2);
    }
}
