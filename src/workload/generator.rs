/*!
 * Workload Generator
 * Random `arrival_time burst_time` workloads for testing
 */

use crate::core::errors::{WorkloadError, WorkloadResult};
use crate::core::limits::{
    GEN_MAX_ARRIVAL, GEN_MAX_BURST, GEN_MAX_PROCESSES, GEN_MIN_ARRIVAL, GEN_MIN_BURST,
    GEN_MIN_PROCESSES,
};
use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Inclusive bounds for generated workloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneratorConfig {
    pub min_processes: usize,
    pub max_processes: usize,
    pub min_arrival: Ticks,
    pub max_arrival: Ticks,
    pub min_burst: Ticks,
    pub max_burst: Ticks,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_processes: GEN_MIN_PROCESSES,
            max_processes: GEN_MAX_PROCESSES,
            min_arrival: GEN_MIN_ARRIVAL,
            max_arrival: GEN_MAX_ARRIVAL,
            min_burst: GEN_MIN_BURST,
            max_burst: GEN_MAX_BURST,
        }
    }
}

impl GeneratorConfig {
    /// Fix the process count
    pub fn with_count(mut self, count: usize) -> Self {
        self.min_processes = count;
        self.max_processes = count;
        self
    }

    pub fn validate(&self) -> WorkloadResult<()> {
        if self.min_processes > self.max_processes {
            return Err(WorkloadError::InvalidBounds(format!(
                "min_processes {} > max_processes {}",
                self.min_processes, self.max_processes
            )));
        }
        if self.min_arrival > self.max_arrival {
            return Err(WorkloadError::InvalidBounds(format!(
                "min_arrival {} > max_arrival {}",
                self.min_arrival, self.max_arrival
            )));
        }
        if self.min_burst == 0 || self.min_burst > self.max_burst {
            return Err(WorkloadError::InvalidBounds(format!(
                "burst range {}..={} must be non-empty and start at 1 or more",
                self.min_burst, self.max_burst
            )));
        }
        Ok(())
    }
}

/// Draw a random workload within `config`'s bounds
///
/// Processes are numbered in generation order, like a loaded file.
pub fn generate<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> WorkloadResult<Vec<Process>> {
    config.validate()?;

    let count = rng.gen_range(config.min_processes..=config.max_processes);
    Ok((0..count)
        .map(|i| {
            let arrival = rng.gen_range(config.min_arrival..=config.max_arrival);
            let burst = rng.gen_range(config.min_burst..=config.max_burst);
            Process::new(i as Pid + 1, arrival, burst)
        })
        .collect())
}

/// Write processes in workload file format, in the given order
pub fn write_workload<W: Write>(mut writer: W, processes: &[Process]) -> io::Result<()> {
    for p in processes {
        writeln!(writer, "{} {}", p.arrival_time, p.burst_time)?;
    }
    writer.flush()
}
