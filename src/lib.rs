pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use config::SimConfig;
pub use crate::core::{Process, TimeSlice};
pub use error::{ErrorKind, SimError, SimResult};
pub use loader::{load_processes_csv, load_processes_reader};
pub use scheduler::{Algorithm, Scheduler};
pub use sim::{simulate, Schedule, Sim};
