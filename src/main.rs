use std::{io, num::NonZeroU64, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sched_model::{load_processes_csv, report, simulate, Algorithm, SimConfig};
use tracing::{info, Level};

/// Simulate FCFS, SJF, priority SJF and round-robin over a process set
#[derive(Parser, Debug)]
#[command(name = "sched-model")]
#[command(about = "CPU scheduling simulator", long_about = None)]
struct Args {
    /// CSV of `id, burst, arrival[, priority]` records
    input: PathBuf,

    /// Round-robin time quantum
    #[arg(short, long, default_value = "2")]
    quantum: NonZeroU64,

    /// Only report one discipline
    #[arg(long, value_enum)]
    only: Option<Discipline>,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Discipline {
    Fcfs,
    Sjf,
    Priority,
    Rr,
}

impl From<Discipline> for Algorithm {
    fn from(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Fcfs => Algorithm::Fcfs,
            Discipline::Sjf => Algorithm::Sjf,
            Discipline::Priority => Algorithm::PrioritySjf,
            Discipline::Rr => Algorithm::RoundRobin,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let processes = load_processes_csv(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    let config = SimConfig::with_quantum(args.quantum);

    let mut out = io::stdout().lock();
    for algorithm in Algorithm::ALL {
        if args.only.is_some_and(|only| Algorithm::from(only) != algorithm) {
            continue;
        }

        let schedule = simulate(algorithm, &processes, &config);
        info!(
            %algorithm,
            slices = schedule.timeline.len(),
            completion = schedule.final_completion(),
            "schedule ready"
        );
        report::render_schedule(&mut out, &schedule).context("writing report")?;
    }

    Ok(())
}
