use super::state::{KernelCtx, Ticks};

#[derive(Debug)]
pub struct Observer {
    step: u64,
    // Wait totals as of the previous tick, indexed like the process table
    last_waits: Vec<Ticks>,
}

impl Observer {
    pub fn new(ctx: &KernelCtx) -> Self {
        Self {
            step: 0,
            last_waits: ctx.states.iter().map(|s| s.wait).collect(),
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &KernelCtx) {
        self.step += 1;

        if let Some(idx) = ctx.current {
            let process = ctx.process(idx);
            debug_assert!(
                process.arrival_time <= ctx.now,
                "Process {} running before its arrival at {}",
                process.id,
                process.arrival_time
            );
            debug_assert!(
                !ctx.state(idx).is_finished(),
                "Finished process {} still owns the CPU",
                process.id
            );
        }

        for (idx, state) in ctx.states.iter().enumerate() {
            let pid = ctx.process(idx).id;
            let previous = self.last_waits[idx];
            debug_assert!(
                state.wait >= previous,
                "Wait of process {pid} went backwards ({previous} -> {})",
                state.wait
            );
            debug_assert!(
                state.remaining <= ctx.process(idx).burst,
                "Process {pid} has more burst left than it started with"
            );
            if let Some(exit) = state.exit_time {
                debug_assert_eq!(
                    state.wait, previous,
                    "Process {pid} finished at {exit} but is still accruing wait"
                );
                debug_assert_eq!(state.remaining, 0, "Process {pid} exited with burst left");
            }
            self.last_waits[idx] = state.wait;
        }
    }
}
