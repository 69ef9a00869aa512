use crate::core::{ProcessId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    // CPU handed to `pid` after the previous owner finished (or it was idle)
    Dispatched {
        at: Ticks,
        pid: ProcessId,
    },
    Preempted {
        at: Ticks,
        pid: ProcessId,
        by: ProcessId,
    },
    Completed {
        at: Ticks,
        pid: ProcessId,
    },
    // Nothing eligible from `at` until the next arrival at `until`
    Idle {
        at: Ticks,
        until: Ticks,
    },
}
