/*!
 * Workload File Tests
 * Loading, generating, and simulating workload files on disk
 */

use lottery_sched::{
    generate, load_workload, write_workload, GeneratorConfig, LotteryScheduler, SchedulerConfig,
    WorkloadError,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "0 5\r\n3 2\r\n1 8\r\n").unwrap();

    let processes = load_workload(file.path()).unwrap();
    let parsed: Vec<_> = processes
        .iter()
        .map(|p| (p.id, p.arrival_time, p.burst_time))
        .collect();
    assert_eq!(parsed, vec![(1, 0, 5), (2, 3, 2), (3, 1, 8)]);
}

#[test]
fn test_blank_line_file_fails_before_simulation() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file).unwrap();

    let err = load_workload(file.path()).unwrap_err();
    assert_eq!(err, WorkloadError::FieldCount { line: 1, found: 0 });
}

#[test]
fn test_empty_file_simulates_to_zero_report() {
    let file = NamedTempFile::new().unwrap();

    let processes = load_workload(file.path()).unwrap();
    let report = LotteryScheduler::from_config(processes, SchedulerConfig::default().with_seed(1))
        .unwrap()
        .run()
        .unwrap()
        .report();

    assert!(report.summary.is_empty());
    assert!(report.to_string().contains("Average waiting time: 0.00"));
}

#[test]
fn test_generated_file_runs_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("testcase.txt");

    let mut rng = StdRng::seed_from_u64(69420);
    let generated = generate(&GeneratorConfig::default().with_count(30), &mut rng).unwrap();
    write_workload(fs::File::create(&path).unwrap(), &generated).unwrap();

    let loaded = load_workload(&path).unwrap();
    assert_eq!(loaded, generated);

    let simulation = LotteryScheduler::from_config(loaded, SchedulerConfig::default().with_seed(7))
        .unwrap()
        .run()
        .unwrap();
    let report = simulation.report();

    assert_eq!(report.summary.process_count, 30);
    let max_wait = report.processes.iter().map(|o| o.waiting_time).max().unwrap();
    assert_eq!(report.summary.max_waiting, max_wait);
}

#[test]
fn test_report_serializes_to_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "0 4\n0 4\n").unwrap();

    let processes = load_workload(file.path()).unwrap();
    let report = LotteryScheduler::from_config(processes, SchedulerConfig::default().with_seed(3))
        .unwrap()
        .run()
        .unwrap()
        .report();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"]["process_count"], 2);
    assert_eq!(json["summary"]["max_waiting"], 4);
    assert_eq!(json["processes"].as_array().unwrap().len(), 2);
}
