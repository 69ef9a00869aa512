use super::{
    event::SimEvent,
    observer::Observer,
    state::{KernelCtx, ProcIdx, Process, Ticks},
    timeline::{TimeSlice, Timeline},
};
use crate::{config::SimConfig, scheduler::Scheduler};

pub struct SchedCore<S: Scheduler> {
    pub ctx: KernelCtx,
    pub scheduler: S,
    timeline: Timeline,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(processes: &[Process], config: &SimConfig) -> Self {
        let ctx = KernelCtx::new(processes);
        let scheduler = S::init(&ctx, config);
        let observer = Observer::new(&ctx);
        Self {
            ctx,
            scheduler,
            timeline: Timeline::new(),
            observer,
        }
    }

    /// Run one time unit: settle the interval ending at `now`, let the
    /// scheduler pick the owner of the CPU from `now` on, then advance.
    pub fn tick(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        let now = self.ctx.now;

        // Whoever held the CPU over [now - 1, now)
        let ran = self.ctx.running();

        if let Some(idx) = self.ctx.account_tick() {
            events.push(SimEvent::Completed {
                at: now,
                pid: self.ctx.process(idx).id,
            });
        }
        if let Some(idx) = ran {
            self.scheduler.tick(&self.ctx, idx);
        }

        let next = self.scheduler.select(&self.ctx);
        debug_assert!(
            next.is_none_or(|idx| self.ctx.is_eligible(idx)),
            "Scheduler picked an ineligible process"
        );
        self.dispatch(next, &mut events);
        self.observer.observe(&self.ctx);

        // Nothing can run or wait before the next arrival, so skip straight to it
        match self.ctx.next_arrival() {
            Some(until) if next.is_none() && self.ctx.eligible().next().is_none() => {
                events.push(SimEvent::Idle { at: now, until });
                self.ctx.advance_time(until - now);
            }
            _ => self.ctx.advance_time(1),
        }
        events
    }

    fn dispatch(&mut self, next: Option<ProcIdx>, events: &mut Vec<SimEvent>) {
        let now = self.ctx.now;
        let running = self.ctx.running();

        if next != running || (next.is_none() && self.ctx.current.is_some()) {
            let pid = next.map(|idx| self.ctx.process(idx).id);
            self.timeline.switch(now, pid);

            match (running, pid) {
                (Some(prev), Some(by)) => events.push(SimEvent::Preempted {
                    at: now,
                    pid: self.ctx.process(prev).id,
                    by,
                }),
                (None, Some(pid)) => events.push(SimEvent::Dispatched { at: now, pid }),
                _ => {}
            }
            self.ctx.current = next;
        }
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn all_finished(&self) -> bool {
        self.ctx.all_finished()
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Close the open slice and hand back the final state and timeline.
    pub fn finish(self) -> (KernelCtx, Vec<TimeSlice>) {
        let now = self.ctx.final_completion();
        let slices = self.timeline.into_slices(now);
        (self.ctx, slices)
    }
}
