use super::state::{ProcessId, Ticks};

/// One uninterrupted run of a single process over `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlice {
    pub pid: ProcessId,
    pub start: Ticks,
    pub stop: Ticks,
}

impl TimeSlice {
    pub fn new(pid: ProcessId, start: Ticks, stop: Ticks) -> Self {
        Self { pid, start, stop }
    }

    pub fn len(&self) -> Ticks {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.stop == self.start
    }
}

#[derive(Debug, Default)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
    open: Option<(ProcessId, Ticks)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close whatever is running at `now` and, if `next` is set, open a new
    /// slice for it starting at `now`.
    pub fn switch(&mut self, now: Ticks, next: Option<ProcessId>) {
        self.close(now);
        self.open = next.map(|pid| (pid, now));
    }

    pub fn close(&mut self, now: Ticks) {
        if let Some((pid, start)) = self.open.take() {
            debug_assert!(start <= now, "Slice for {pid} closes before it opens");
            // Zero-length slices come from a switch at the tick a process was picked
            if start < now {
                self.push(TimeSlice::new(pid, start, now));
            }
        }
    }

    pub fn push(&mut self, slice: TimeSlice) {
        debug_assert!(
            self.slices.last().is_none_or(|last| last.stop <= slice.start),
            "Slice {slice:?} overlaps the previous one"
        );
        self.slices.push(slice);
    }

    pub fn into_slices(mut self, now: Ticks) -> Vec<TimeSlice> {
        self.close(now);
        self.slices
    }
}
