/*!
 * Scheduler Configuration
 * Ticket weights, slice bounds, seeding, and environment overrides
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::{LONG_JOB_TICKETS, MIN_TIME_SLICE, SHORT_JOB_TICKETS};
use crate::core::types::{Ticks, Tickets};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SchedulerConfig {
    pub short_job_tickets: Tickets,
    pub long_job_tickets: Tickets,
    pub min_time_slice: Ticks,
    /// Seed for the lottery draw; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Keep a `RoundRecord` for every round
    pub record_rounds: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            short_job_tickets: SHORT_JOB_TICKETS,
            long_job_tickets: LONG_JOB_TICKETS,
            min_time_slice: MIN_TIME_SLICE,
            seed: None,
            record_rounds: false,
        }
    }
}

impl SchedulerConfig {
    /// Defaults overlaid with `LOTTERY_*` environment variables
    ///
    /// Environment variables:
    /// - LOTTERY_SEED: lottery seed
    /// - LOTTERY_SHORT_TICKETS: tickets for short jobs (default: 10)
    /// - LOTTERY_LONG_TICKETS: tickets for long jobs (default: 1)
    /// - LOTTERY_MIN_SLICE: minimum time slice in seconds (default: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(seed) = env_parse("LOTTERY_SEED") {
            config.seed = Some(seed);
        }
        if let Some(tickets) = env_parse("LOTTERY_SHORT_TICKETS") {
            config.short_job_tickets = tickets;
        }
        if let Some(tickets) = env_parse("LOTTERY_LONG_TICKETS") {
            config.long_job_tickets = tickets;
        }
        if let Some(slice) = env_parse("LOTTERY_MIN_SLICE") {
            config.min_time_slice = slice;
        }
        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tickets(mut self, short_job: Tickets, long_job: Tickets) -> Self {
        self.short_job_tickets = short_job;
        self.long_job_tickets = long_job;
        self
    }

    pub fn with_min_time_slice(mut self, slice: Ticks) -> Self {
        self.min_time_slice = slice;
        self
    }

    pub fn with_round_history(mut self) -> Self {
        self.record_rounds = true;
        self
    }

    /// Reject configurations that could stall the simulation
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.long_job_tickets == 0 || self.short_job_tickets == 0 {
            return Err(SchedulerError::InvalidConfig(
                "ticket counts must be at least 1".into(),
            ));
        }
        if self.min_time_slice == 0 {
            return Err(SchedulerError::InvalidConfig(
                "min_time_slice must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
