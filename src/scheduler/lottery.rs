/*!
 * Lottery Selection
 * Weighted draw over tickets plus accumulated wait time
 */

use super::queue::ReadyQueue;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Tickets;
use crate::process::Process;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Source of winning tickets
pub trait DrawSource {
    /// Draw a ticket uniformly from `1..=total`
    fn draw(&mut self, total: Tickets) -> Tickets;
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn draw(&mut self, total: Tickets) -> Tickets {
        (**self).draw(total)
    }
}

/// Pseudo-random draws backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomDraw<R = StdRng> {
    rng: R,
}

impl RandomDraw<StdRng> {
    /// Reproducible draw sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> RandomDraw<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DrawSource for RandomDraw<R> {
    fn draw(&mut self, total: Tickets) -> Tickets {
        self.rng.gen_range(1..=total)
    }
}

/// Replays a fixed list of draws, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedDraw {
    draws: Vec<Tickets>,
    next: usize,
}

impl ScriptedDraw {
    pub fn new(draws: impl Into<Vec<Tickets>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "scripted draw sequence must not be empty");
        Self { draws, next: 0 }
    }

    /// Always draw the same ticket
    pub fn constant(draw: Tickets) -> Self {
        Self::new(vec![draw])
    }
}

impl DrawSource for ScriptedDraw {
    fn draw(&mut self, _total: Tickets) -> Tickets {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}

/// Result of one lottery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Winner's position in the ready queue
    pub position: usize,
    pub total_weight: Tickets,
    pub draw: Tickets,
}

/// Sum of `tickets + wait_time` over the queue
pub fn total_weight(queue: &ReadyQueue, processes: &[Process]) -> Tickets {
    queue.iter().map(|i| processes[i].weight()).sum()
}

/// Hold the lottery over an already ticket-annotated queue
///
/// Walks the queue in order; the first process whose running weight
/// strictly exceeds the draw wins. A draw equal to the total weight is
/// exceeded by nobody and goes to the head of the queue.
pub fn select<D: DrawSource + ?Sized>(
    queue: &ReadyQueue,
    processes: &[Process],
    source: &mut D,
) -> SchedulerResult<Selection> {
    if queue.is_empty() {
        return Err(SchedulerError::EmptyQueue);
    }

    let total = total_weight(queue, processes);
    if total == 0 {
        return Err(SchedulerError::ZeroWeight);
    }

    let draw = source.draw(total);
    if !(1..=total).contains(&draw) {
        return Err(SchedulerError::DrawOutOfRange { draw, total });
    }

    let mut cumulative = 0;
    let position = queue
        .iter()
        .position(|i| {
            cumulative += processes[i].weight();
            cumulative > draw
        })
        .unwrap_or(0);

    Ok(Selection {
        position,
        total_weight: total,
        draw,
    })
}
