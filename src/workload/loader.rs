/*!
 * Workload Loader
 * Parses `arrival_time burst_time` lines into process records
 */

use crate::core::errors::{WorkloadError, WorkloadResult};
use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Load a workload file
pub fn load_workload(path: impl AsRef<Path>) -> WorkloadResult<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| WorkloadError::Io(format!("{}: {}", path.display(), e)))?;
    let processes = read_workload(BufReader::new(file))?;
    info!(path = %path.display(), processes = processes.len(), "Workload loaded");
    Ok(processes)
}

/// Read a workload from any buffered reader
///
/// Stops at the first malformed line; nothing is returned for a bad file.
pub fn read_workload<R: BufRead>(reader: R) -> WorkloadResult<Vec<Process>> {
    let mut processes = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let (arrival, burst) = parse_line(index + 1, &line)?;
        processes.push(Process::new(processes.len() as Pid + 1, arrival, burst));
    }
    debug!(processes = processes.len(), "workload parsed");
    Ok(processes)
}

/// Parse a workload held in memory
pub fn parse_workload(input: &str) -> WorkloadResult<Vec<Process>> {
    read_workload(input.as_bytes())
}

fn parse_line(line: usize, text: &str) -> WorkloadResult<(Ticks, Ticks)> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[arrival, burst] = fields.as_slice() else {
        return Err(WorkloadError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let arrival = parse_field(line, "arrival_time", arrival)?;
    let burst = parse_field(line, "burst_time", burst)?;
    if burst == 0 {
        return Err(WorkloadError::ZeroBurst { line });
    }
    Ok((arrival, burst))
}

fn parse_field(line: usize, field: &'static str, value: &str) -> WorkloadResult<Ticks> {
    value.parse().map_err(|_| WorkloadError::InvalidInteger {
        line,
        field,
        value: value.to_string(),
    })
}
