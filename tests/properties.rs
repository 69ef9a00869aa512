//! Invariants every discipline must satisfy, checked over seeded random
//! workloads.

use rand::prelude::*;
use rustc_hash::FxHashMap;
use sched_model::{
    core::Ticks,
    scheduler::{RoundRobinScheduler, SjfScheduler},
    simulate, Algorithm, Process, Schedule, Sim, SimConfig,
};

const SEEDS: u64 = 200;

/// Arrival-ordered workload of up to 8 processes.
fn random_processes(seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.random_range(1..=8);
    let mut arrivals: Vec<Ticks> = (0..count).map(|_| rng.random_range(0..12)).collect();
    arrivals.sort_unstable();

    arrivals
        .into_iter()
        .enumerate()
        .map(|(i, arrival)| {
            Process::with_priority(
                i as i64 + 1,
                rng.random_range(1..=6),
                arrival,
                rng.random_range(0..4),
            )
        })
        .collect()
}

fn for_each_schedule(mut check: impl FnMut(&[Process], &Schedule)) {
    let config = SimConfig::default();
    for seed in 0..SEEDS {
        let processes = random_processes(seed);
        for algorithm in Algorithm::ALL {
            let schedule = simulate(algorithm, &processes, &config);
            check(&processes, &schedule);
        }
    }
}

#[test]
fn conservation() {
    for_each_schedule(|processes, schedule| {
        assert_eq!(schedule.rows.len(), processes.len());
        for (row, process) in schedule.rows.iter().zip(processes) {
            assert_eq!(row.process, *process);
            assert_eq!(row.turnaround(), row.wait + process.burst);
            assert_eq!(
                row.exit,
                process.arrival_time + row.wait + process.burst,
                "{}: process {}",
                schedule.title(),
                process.id
            );
        }
    });
}

#[test]
fn timeline_tiles_busy_time() {
    for_each_schedule(|processes, schedule| {
        let timeline = &schedule.timeline;
        for pair in timeline.windows(2) {
            assert!(pair[0].stop <= pair[1].start, "{}: overlap", schedule.title());
            assert!(
                pair[0].pid != pair[1].pid || pair[0].stop < pair[1].start,
                "{}: adjacent slices for {} should be one",
                schedule.title(),
                pair[0].pid
            );
        }

        let mut ran: FxHashMap<i64, Ticks> = FxHashMap::default();
        for slice in timeline {
            assert!(!slice.is_empty());
            *ran.entry(slice.pid).or_default() += slice.len();
        }

        for (process, row) in processes.iter().zip(&schedule.rows) {
            assert_eq!(ran.get(&process.id), Some(&process.burst));
            let last = timeline.iter().rev().find(|s| s.pid == process.id).unwrap();
            assert_eq!(last.stop, row.exit);
            assert!(timeline
                .iter()
                .filter(|s| s.pid == process.id)
                .all(|s| s.start >= process.arrival_time));
        }

        // Some slice covers every unit during which work was pending
        for t in 0..schedule.final_completion() {
            let pending = schedule
                .rows
                .iter()
                .any(|r| r.process.arrival_time <= t && t < r.exit);
            let busy = timeline.iter().any(|s| s.start <= t && t < s.stop);
            assert_eq!(pending, busy, "{}: t={t}", schedule.title());
        }
    });
}

#[test]
fn throughput_identity() {
    for_each_schedule(|processes, schedule| {
        let final_completion = schedule.rows.iter().map(|r| r.exit).max().unwrap();
        let expected = processes.len() as f64 / final_completion as f64;
        assert!((schedule.summary.throughput - expected).abs() < 1e-12);
    });
}

#[test]
fn round_robin_turns_bounded_by_quantum() {
    let config = SimConfig::default();
    let quantum = config.quantum.get();

    for seed in 0..SEEDS {
        let processes = random_processes(seed);
        let schedule = simulate(Algorithm::RoundRobin, &processes, &config);

        for slice in schedule.timeline.iter().filter(|s| s.len() > quantum) {
            // Running on past a turn is only allowed with nobody else to hand over to
            for boundary in (slice.start + quantum..slice.stop).step_by(quantum as usize) {
                let contender = schedule.rows.iter().any(|r| {
                    r.id() != slice.pid && r.process.arrival_time <= boundary && boundary < r.exit
                });
                assert!(!contender, "seed {seed}: {slice:?} overran at {boundary}");
            }
        }
    }
}

#[test]
fn shortest_remaining_minimises_turnaround() {
    let config = SimConfig::default();
    for seed in 0..SEEDS {
        let processes = random_processes(seed);
        let sjf = simulate(Algorithm::Sjf, &processes, &config).summary;
        let priority = simulate(Algorithm::PrioritySjf, &processes, &config).summary;

        for other in [Algorithm::Fcfs, Algorithm::RoundRobin] {
            let other = simulate(other, &processes, &config).summary;
            assert!(sjf.mean_turnaround <= other.mean_turnaround + 1e-9, "seed {seed}");
        }
        assert!((sjf.mean_turnaround - priority.mean_turnaround).abs() < 1e-9, "seed {seed}");
    }
}

#[test]
fn waits_never_decrease() {
    let config = SimConfig::default();
    for seed in 0..SEEDS {
        let processes = random_processes(seed);
        let mut sim = Sim::<SjfScheduler>::new(Algorithm::Sjf, &processes, &config);
        let mut rr = Sim::<RoundRobinScheduler>::new(Algorithm::RoundRobin, &processes, &config);

        for sim_states in [&mut sim as &mut dyn Stepper, &mut rr] {
            let mut last = sim_states.snapshot();
            while !sim_states.done() {
                sim_states.advance();
                let now = sim_states.snapshot();
                for (before, after) in last.iter().zip(&now) {
                    assert!(after.0 >= before.0);
                    if before.1.is_some() {
                        assert_eq!(after.0, before.0, "seed {seed}: wait grew after exit");
                    }
                }
                last = now;
            }
        }
    }
}

trait Stepper {
    fn snapshot(&self) -> Vec<(Ticks, Option<Ticks>)>;
    fn done(&self) -> bool;
    fn advance(&mut self);
}

impl<S: sched_model::Scheduler> Stepper for Sim<S> {
    fn snapshot(&self) -> Vec<(Ticks, Option<Ticks>)> {
        self.core
            .ctx
            .states
            .iter()
            .map(|s| (s.wait, s.exit_time))
            .collect()
    }

    fn done(&self) -> bool {
        self.all_processes_completed()
    }

    fn advance(&mut self) {
        self.step();
    }
}
