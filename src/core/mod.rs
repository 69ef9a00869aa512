pub mod driver;
pub mod event;
pub mod observer;
pub mod state;
pub mod timeline;

pub use driver::SchedCore;
pub use event::SimEvent;
pub use state::{KernelCtx, ProcIdx, Process, ProcessId, RuntimeState, Ticks};
pub use timeline::{TimeSlice, Timeline};
