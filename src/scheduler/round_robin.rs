use super::{KernelCtx, ProcIdx, Scheduler, SimConfig};
use crate::core::Ticks;

/// Circular scan over the process table with a fixed quantum.
pub struct RoundRobinScheduler {
    quantum: Ticks,
    // Last index the cursor settled on; the scan resumes just after it
    cursor: Option<ProcIdx>,
    // Units the current owner has run in its present turn
    used: Ticks,
}

impl RoundRobinScheduler {
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }

    /// Walk forward from just past the cursor, wrapping, and return the first
    /// eligible process. The cursor's own process is considered last.
    pub fn next_process(&self, ctx: &KernelCtx) -> Option<ProcIdx> {
        let len = ctx.len();
        let first = self.cursor.map_or(0, |idx| idx + 1);

        (0..len)
            .map(|offset| (first + offset) % len)
            .find(|&idx| ctx.is_eligible(idx))
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round-robin";

    fn init(_ctx: &KernelCtx, config: &SimConfig) -> Self {
        Self {
            quantum: config.quantum.get(),
            cursor: None,
            used: 0,
        }
    }

    fn select(&mut self, ctx: &KernelCtx) -> Option<ProcIdx> {
        if let Some(current) = ctx.running() {
            if self.used < self.quantum {
                return Some(current);
            }
        }

        let next = self.next_process(ctx)?;
        // Same process again (nobody else eligible) just starts a fresh turn
        self.cursor = Some(next);
        self.used = 0;
        Some(next)
    }

    fn tick(&mut self, _ctx: &KernelCtx, _running: ProcIdx) {
        self.used += 1;
    }
}
