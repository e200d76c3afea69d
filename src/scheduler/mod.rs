/*!
 * Lottery Scheduler
 * Short-job-biased lottery scheduling with aging and arrival preemption
 *
 * Each round:
 * 1. Tickets are allocated against the mean remaining time of the queue
 * 2. A weighted lottery over `tickets + wait_time` picks a winner
 * 3. The winner runs second by second until it completes, a new process
 *    arrives, or the slice (the mean remaining time) runs out
 */

pub mod config;
mod executor;
pub mod lottery;
pub mod queue;
pub mod round;
pub mod tickets;

pub use config::SchedulerConfig;
pub use lottery::{DrawSource, RandomDraw, ScriptedDraw, Selection};
pub use queue::ReadyQueue;
pub use round::{RoundRecord, SliceOutcome};
pub use tickets::Allocation;

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use crate::process::Process;
use crate::stats::Report;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Scheduling engine
///
/// Owns the master process list (sorted by arrival, ties in workload
/// order), the ready queue, and the simulation clock.
pub struct LotteryScheduler<D: DrawSource> {
    processes: Vec<Process>,
    queue: ReadyQueue,
    clock: Ticks,
    started_at: Ticks,
    seeded: bool,
    rounds: u64,
    config: SchedulerConfig,
    source: D,
    history: Vec<RoundRecord>,
}

impl LotteryScheduler<RandomDraw> {
    /// Engine drawing from `config.seed`, or OS entropy when unset
    pub fn from_config(processes: Vec<Process>, config: SchedulerConfig) -> SchedulerResult<Self> {
        let source = RandomDraw::from_seed_option(config.seed);
        Self::with_config(processes, source, config)
    }
}

impl<D: DrawSource> LotteryScheduler<D> {
    /// Create engine with default configuration
    pub fn new(processes: Vec<Process>, source: D) -> Self {
        Self::build(processes, source, SchedulerConfig::default())
    }

    /// Create engine with validated configuration
    pub fn with_config(
        processes: Vec<Process>,
        source: D,
        config: SchedulerConfig,
    ) -> SchedulerResult<Self> {
        config.validate()?;
        Ok(Self::build(processes, source, config))
    }

    fn build(mut processes: Vec<Process>, source: D, config: SchedulerConfig) -> Self {
        // Stable: equal arrivals keep workload order
        processes.sort_by_key(|p| p.arrival_time);

        info!(
            processes = processes.len(),
            short_job_tickets = config.short_job_tickets,
            long_job_tickets = config.long_job_tickets,
            seed = ?config.seed,
            "Lottery scheduler initialized"
        );

        Self {
            processes,
            queue: ReadyQueue::new(),
            clock: 0,
            started_at: 0,
            seeded: false,
            rounds: 0,
            config,
            source,
            history: Vec::new(),
        }
    }

    /// Admit the earliest arrivals and start the clock at their arrival time
    ///
    /// Only the first call has any effect. Returns whether anything was admitted.
    pub fn seed(&mut self) -> bool {
        if self.seeded {
            return false;
        }
        self.seeded = true;

        match self.queue.seed(&mut self.processes) {
            Some(start) => {
                self.clock = start;
                self.started_at = start;
                debug!(start, ready = self.queue.len(), "ready queue seeded");
                true
            }
            None => {
                info!("Empty workload, nothing to schedule");
                false
            }
        }
    }

    /// Run one allocate/draw/execute round
    ///
    /// Returns `None` once every process has finished. When the queue is
    /// empty but processes are still to arrive, the clock jumps to the
    /// next arrival first.
    pub fn step(&mut self) -> SchedulerResult<Option<RoundRecord>> {
        self.seed();

        if self.queue.is_empty() {
            let Some(next) = self.queue.next_arrival(&self.processes) else {
                return Ok(None);
            };
            info!(from = self.clock, to = next, "CPU idle, advancing to next arrival");
            self.clock = self.clock.max(next);
            self.queue.admit_arrivals(&mut self.processes, self.clock);
        }

        let allocation = tickets::allocate(&self.queue, &mut self.processes, &self.config)
            .ok_or(SchedulerError::EmptyQueue)?;
        let contenders: Vec<_> = self.queue.iter().map(|i| self.processes[i].id).collect();
        let selection = lottery::select(&self.queue, &self.processes, &mut self.source)?;
        let winner = self
            .queue
            .get(selection.position)
            .ok_or(SchedulerError::EmptyQueue)?;

        let started_at = self.clock;
        let (ran_for, outcome) =
            self.execute_slice(selection.position, winner, allocation.time_slice);
        self.rounds += 1;

        let record = RoundRecord {
            round: self.rounds,
            started_at,
            contenders,
            avg_remaining: allocation.avg_remaining,
            time_slice: allocation.time_slice,
            total_weight: selection.total_weight,
            draw: selection.draw,
            winner: self.processes[winner].id,
            ran_for,
            outcome,
        };

        debug!(
            round = record.round,
            at = started_at,
            ready = record.contenders.len(),
            short_jobs = allocation.short_jobs,
            time_slice = record.time_slice,
            draw = record.draw,
            total_weight = record.total_weight,
            winner = record.winner,
            ran_for,
            outcome = outcome.as_str(),
            "round complete"
        );

        if self.config.record_rounds {
            self.history.push(record.clone());
        }
        Ok(Some(record))
    }

    /// Run until every process has finished
    #[instrument(skip(self), fields(processes = self.processes.len()))]
    pub fn run(mut self) -> SchedulerResult<Simulation> {
        while self.step()?.is_some() {}

        info!(
            rounds = self.rounds,
            started_at = self.started_at,
            finished_at = self.clock,
            "Simulation complete"
        );

        Ok(Simulation {
            processes: self.processes,
            rounds: self.history,
            round_count: self.rounds,
            started_at: self.started_at,
            finished_at: self.clock,
        })
    }

    /// Current simulation time
    #[inline]
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Processes currently in the ready queue, in queue order
    pub fn ready(&self) -> impl Iterator<Item = &Process> + '_ {
        self.queue.iter().map(|i| &self.processes[i])
    }

    /// Master list, sorted by arrival
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Whether the queue and the unadmitted list are both exhausted
    pub fn is_finished(&self) -> bool {
        self.seeded && self.queue.is_empty() && !self.queue.has_pending(&self.processes)
    }
}

/// Finished simulation
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    /// Every process in its final state, sorted by arrival
    pub processes: Vec<Process>,
    /// Round history (empty unless `record_rounds` was set)
    pub rounds: Vec<RoundRecord>,
    pub round_count: u64,
    pub started_at: Ticks,
    pub finished_at: Ticks,
}

impl Simulation {
    pub fn report(&self) -> Report {
        Report::from_processes(&self.processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload(pairs: &[(Ticks, Ticks)]) -> Vec<Process> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(at, bt))| Process::new(i as u32 + 1, at, bt))
            .collect()
    }

    #[test]
    fn test_master_list_sorted_stably() {
        let engine = LotteryScheduler::new(
            workload(&[(5, 1), (0, 2), (5, 3), (0, 4)]),
            ScriptedDraw::constant(1),
        );
        let ids: Vec<_> = engine.processes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_seed_starts_clock_at_first_arrival() {
        let mut engine =
            LotteryScheduler::new(workload(&[(4, 2), (4, 1), (7, 1)]), ScriptedDraw::constant(1));
        assert!(engine.seed());
        assert!(!engine.seed());
        assert_eq!(engine.clock(), 4);
        assert_eq!(engine.queue_len(), 2);
        assert!(engine.ready().all(|p| p.wait_time == 0));
    }

    #[test]
    fn test_step_on_empty_workload() {
        let mut engine = LotteryScheduler::new(Vec::new(), ScriptedDraw::constant(1));
        assert_eq!(engine.step().unwrap(), None);
        assert!(engine.is_finished());
    }

    #[test]
    fn test_idle_gap_jumps_clock() {
        let mut engine =
            LotteryScheduler::new(workload(&[(1, 1), (10, 1)]), ScriptedDraw::constant(1));

        let first = engine.step().unwrap().unwrap();
        assert_eq!(first.outcome, SliceOutcome::Completed);
        assert_eq!(engine.clock(), 2);

        let second = engine.step().unwrap().unwrap();
        assert_eq!(second.started_at, 10);
        assert_eq!(engine.clock(), 11);
        assert_eq!(engine.processes()[1].wait_time, 0);
        assert!(engine.is_finished());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = LotteryScheduler::with_config(
            workload(&[(0, 1)]),
            ScriptedDraw::constant(1),
            SchedulerConfig::default().with_tickets(10, 0),
        );
        assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
    }

    #[test]
    fn test_out_of_range_draw_surfaces() {
        let mut engine = LotteryScheduler::new(workload(&[(0, 3)]), ScriptedDraw::constant(99));
        assert_eq!(
            engine.step().unwrap_err(),
            SchedulerError::DrawOutOfRange { draw: 99, total: 10 }
        );
    }

    #[test]
    fn test_history_only_when_enabled() {
        let engine = LotteryScheduler::new(workload(&[(0, 3)]), ScriptedDraw::constant(1));
        let simulation = engine.run().unwrap();
        assert!(simulation.rounds.is_empty());
        assert_eq!(simulation.round_count, 1);

        let engine = LotteryScheduler::with_config(
            workload(&[(0, 3)]),
            ScriptedDraw::constant(1),
            SchedulerConfig::default().with_round_history(),
        )
        .unwrap();
        let simulation = engine.run().unwrap();
        assert_eq!(simulation.rounds.len(), 1);
    }
}
