/*!
 * Lottery Scheduler - Main Entry Point
 *
 * Usage:
 * - lottery [--seed N] [--json] <workload>     simulate a workload file
 * - lottery generate [--seed N] [--count N] <path>   write a random workload
 */

use lottery_sched::{
    generate, init_tracing, load_workload, write_workload, GeneratorConfig, LotteryError,
    LotteryResult, LotteryScheduler, SchedulerConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
enum Command {
    Run {
        workload: PathBuf,
        seed: Option<u64>,
        json: bool,
    },
    Generate {
        path: PathBuf,
        seed: Option<u64>,
        count: Option<usize>,
    },
}

fn main() -> miette::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args)? {
        Command::Run {
            workload,
            seed,
            json,
        } => run(workload, seed, json)?,
        Command::Generate { path, seed, count } => generate_file(path, seed, count)?,
    }
    Ok(())
}

fn parse_args(args: &[String]) -> LotteryResult<Command> {
    let (generating, rest) = match args.first().map(String::as_str) {
        Some("generate") => (true, &args[1..]),
        _ => (false, args),
    };

    let mut seed = None;
    let mut count = None;
    let mut json = false;
    let mut path = None;

    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => seed = Some(parse_value(iter.next(), "--seed")?),
            "--count" if generating => count = Some(parse_value(iter.next(), "--count")?),
            "--json" if !generating => json = true,
            flag if flag.starts_with("--") => {
                return Err(LotteryError::Usage(format!("unknown option '{}'", flag)));
            }
            value if path.is_none() => path = Some(PathBuf::from(value)),
            value => {
                return Err(LotteryError::Usage(format!(
                    "unexpected argument '{}'",
                    value
                )));
            }
        }
    }

    let path = path.ok_or_else(|| LotteryError::Usage("missing file path".into()))?;
    Ok(if generating {
        Command::Generate { path, seed, count }
    } else {
        Command::Run {
            workload: path,
            seed,
            json,
        }
    })
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> LotteryResult<T> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| LotteryError::Usage(format!("{} expects a non-negative integer", flag)))
}

fn run(workload: PathBuf, seed: Option<u64>, json: bool) -> LotteryResult<()> {
    let processes = load_workload(&workload)?;

    let mut config = SchedulerConfig::from_env();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let simulation = LotteryScheduler::from_config(processes, config)?.run()?;
    let report = simulation.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn generate_file(path: PathBuf, seed: Option<u64>, count: Option<usize>) -> LotteryResult<()> {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let mut config = GeneratorConfig::default();
    if let Some(count) = count {
        config = config.with_count(count);
    }

    let processes = generate(&config, &mut rng)?;
    write_workload(BufWriter::new(File::create(&path)?), &processes)?;

    info!(path = %path.display(), processes = processes.len(), "Workload written");
    println!("Wrote {} processes to {}", processes.len(), path.display());
    Ok(())
}
