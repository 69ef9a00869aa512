use std::cmp::Reverse;

use super::{KernelCtx, ProcIdx, Scheduler, SimConfig};
use crate::core::{ProcessId, Ticks};

/// SJF where priority only breaks ties in remaining burst: a high-priority
/// job never preempts a shorter one.
pub struct PrioritySjfScheduler;

fn rank(ctx: &KernelCtx, idx: ProcIdx) -> (Ticks, Reverse<i64>, Ticks, ProcessId, ProcIdx) {
    let process = ctx.process(idx);
    (
        ctx.state(idx).remaining,
        Reverse(process.priority),
        process.arrival_time,
        process.id,
        idx,
    )
}

fn preempts(ctx: &KernelCtx, candidate: ProcIdx, current: ProcIdx) -> bool {
    let (cand, cur) = (ctx.state(candidate), ctx.state(current));
    cand.remaining < cur.remaining
        || (cand.remaining == cur.remaining
            && ctx.process(candidate).priority > ctx.process(current).priority)
}

impl Scheduler for PrioritySjfScheduler {
    const NAME: &'static str = "Priority";

    fn init(_ctx: &KernelCtx, _config: &SimConfig) -> Self {
        Self
    }

    fn select(&mut self, ctx: &KernelCtx) -> Option<ProcIdx> {
        let best = ctx.eligible().min_by_key(|&idx| rank(ctx, idx))?;

        match ctx.running() {
            Some(current) if !preempts(ctx, best, current) => Some(current),
            _ => Some(best),
        }
    }
}
