use super::{KernelCtx, ProcIdx, Scheduler, SimConfig};
use crate::core::{ProcessId, Ticks};

/// Shortest remaining time first. A running process is only displaced by a
/// strictly better candidate; ties go to the earlier arrival, then the lower id.
pub struct SjfScheduler;

fn rank(ctx: &KernelCtx, idx: ProcIdx) -> (Ticks, Ticks, ProcessId, ProcIdx) {
    let process = ctx.process(idx);
    (ctx.state(idx).remaining, process.arrival_time, process.id, idx)
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "Shortest-job-first";

    fn init(_ctx: &KernelCtx, _config: &SimConfig) -> Self {
        Self
    }

    fn select(&mut self, ctx: &KernelCtx) -> Option<ProcIdx> {
        let best = ctx.eligible().min_by_key(|&idx| rank(ctx, idx))?;

        match ctx.running() {
            Some(current) if rank(ctx, current) <= rank(ctx, best) => Some(current),
            _ => Some(best),
        }
    }
}
