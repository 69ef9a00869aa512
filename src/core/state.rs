// Index into the per-run process Vec
pub type ProcIdx = usize;
pub type ProcessId = i64;
pub type Ticks = u64;

/// One input record. Never mutated once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst: Ticks,
    // Higher value wins; only the priority variant looks at it
    pub priority: i64,
}

impl Process {
    pub fn new(id: ProcessId, burst: Ticks, arrival_time: Ticks) -> Self {
        Self::with_priority(id, burst, arrival_time, 0)
    }

    pub fn with_priority(id: ProcessId, burst: Ticks, arrival_time: Ticks, priority: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst,
            priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeState {
    pub remaining: Ticks,
    pub wait: Ticks,
    pub exit_time: Option<Ticks>,
}

impl RuntimeState {
    fn new(burst: Ticks) -> Self {
        Self {
            remaining: burst,
            wait: 0,
            exit_time: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.exit_time.is_some()
    }
}

/// Everything a scheduler may look at while choosing the next process.
#[derive(Debug)]
pub struct KernelCtx {
    pub now: Ticks,
    pub processes: Vec<Process>,
    pub states: Vec<RuntimeState>,
    pub current: Option<ProcIdx>,
}

impl KernelCtx {
    pub fn new(processes: &[Process]) -> Self {
        let processes = processes.to_vec();
        let states = processes
            .iter()
            .map(|p| RuntimeState::new(p.burst))
            .collect();

        Self {
            now: 0,
            processes,
            states,
            current: None,
        }
    }

    pub fn process(&self, idx: ProcIdx) -> &Process {
        &self.processes[idx]
    }

    pub fn state(&self, idx: ProcIdx) -> &RuntimeState {
        &self.states[idx]
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Arrived by `now` and not yet finished, i.e. may be handed the CPU.
    pub fn is_eligible(&self, idx: ProcIdx) -> bool {
        self.processes[idx].arrival_time <= self.now && !self.states[idx].is_finished()
    }

    pub fn eligible(&self) -> impl Iterator<Item = ProcIdx> + '_ {
        (0..self.len()).filter(move |&idx| self.is_eligible(idx))
    }

    pub fn all_finished(&self) -> bool {
        self.states.iter().all(RuntimeState::is_finished)
    }

    /// The running process, if it is still unfinished.
    pub fn running(&self) -> Option<ProcIdx> {
        self.current.filter(|&idx| !self.states[idx].is_finished())
    }

    /// Earliest arrival still in the future.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.processes
            .iter()
            .map(|p| p.arrival_time)
            .filter(|&arrival| arrival > self.now)
            .min()
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    /// Charge the interval `[now - 1, now)`: the running process burns one
    /// unit, every other arrived and unfinished process waits one unit.
    /// Returns the process that completed at `now`, if any.
    pub fn account_tick(&mut self) -> Option<ProcIdx> {
        let now = self.now;
        let mut completed = None;

        for idx in 0..self.processes.len() {
            if self.processes[idx].arrival_time >= now || self.states[idx].is_finished() {
                continue;
            }

            let state = &mut self.states[idx];
            if self.current == Some(idx) {
                debug_assert!(state.remaining > 0, "Running process {idx} has no burst left");
                state.remaining -= 1;
                if state.remaining == 0 {
                    state.exit_time = Some(now);
                    completed = Some(idx);
                }
            } else {
                state.wait += 1;
            }
        }

        completed
    }

    pub fn final_completion(&self) -> Ticks {
        self.states
            .iter()
            .filter_map(|s| s.exit_time)
            .max()
            .unwrap_or(0)
    }
}
