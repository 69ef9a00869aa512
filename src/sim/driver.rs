use tracing::{debug, trace};

use super::metrics::{ProcessReport, Schedule};
use crate::{
    config::SimConfig,
    core::{driver::SchedCore, Process, SimEvent, Ticks},
    scheduler::{
        fcfs, Algorithm, PrioritySjfScheduler, RoundRobinScheduler, Scheduler, SjfScheduler,
    },
};

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
    algorithm: Algorithm,
}

impl<S: Scheduler> Sim<S> {
    /// The process slice is copied; the caller's set is never touched.
    pub fn new(algorithm: Algorithm, processes: &[Process], config: &SimConfig) -> Self {
        Self {
            core: SchedCore::<S>::new(processes, config),
            algorithm,
        }
    }

    pub fn step(&mut self) -> Vec<SimEvent> {
        let events = self.core.tick();
        for event in &events {
            match event {
                SimEvent::Idle { .. } => trace!(algorithm = %self.algorithm, ?event),
                _ => debug!(algorithm = %self.algorithm, ?event),
            }
        }
        events
    }

    pub fn all_processes_completed(&self) -> bool {
        self.core.all_finished()
    }

    pub fn now(&self) -> Ticks {
        self.core.now()
    }

    pub fn run(mut self) -> Schedule {
        while !self.all_processes_completed() {
            self.step();
        }
        debug!(
            algorithm = %self.algorithm,
            ticks = self.core.observer().steps(),
            "simulation finished"
        );
        self.into_schedule()
    }

    fn into_schedule(self) -> Schedule {
        let (ctx, timeline) = self.core.finish();
        let rows = ctx
            .processes
            .iter()
            .zip(&ctx.states)
            .map(|(&process, state)| ProcessReport {
                process,
                wait: state.wait,
                exit: state.exit_time.unwrap_or_default(),
            })
            .collect();

        Schedule::new(self.algorithm, timeline, rows)
    }
}

/// Simulate one discipline over its own copy of `processes`.
pub fn simulate(algorithm: Algorithm, processes: &[Process], config: &SimConfig) -> Schedule {
    match algorithm {
        Algorithm::Fcfs => fcfs::schedule(processes),
        Algorithm::Sjf => Sim::<SjfScheduler>::new(algorithm, processes, config).run(),
        Algorithm::PrioritySjf => {
            Sim::<PrioritySjfScheduler>::new(algorithm, processes, config).run()
        }
        Algorithm::RoundRobin => {
            Sim::<RoundRobinScheduler>::new(algorithm, processes, config).run()
        }
    }
}
