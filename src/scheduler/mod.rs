pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;

use std::fmt;

use crate::{
    config::SimConfig,
    core::{KernelCtx, ProcIdx},
};
pub use priority::PrioritySjfScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

/// A tick-driven selection policy. The core settles every time unit before
/// asking who owns the CPU next, so `select` always sees this tick's
/// burst decrements and completions.
pub trait Scheduler {
    const NAME: &'static str;

    fn init(ctx: &KernelCtx, config: &SimConfig) -> Self;

    /// Process that runs from `ctx.now`, or `None` to leave the CPU idle.
    /// Must only return eligible processes.
    fn select(&mut self, ctx: &KernelCtx) -> Option<ProcIdx>;

    /// Called once per time unit the process `running` spent on the CPU.
    fn tick(&mut self, _ctx: &KernelCtx, _running: ProcIdx) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    PrioritySjf,
    RoundRobin,
}

impl Algorithm {
    /// Report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::PrioritySjf,
        Algorithm::RoundRobin,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Fcfs => fcfs::NAME,
            Algorithm::Sjf => SjfScheduler::NAME,
            Algorithm::PrioritySjf => PrioritySjfScheduler::NAME,
            Algorithm::RoundRobin => RoundRobinScheduler::NAME,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
