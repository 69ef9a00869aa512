pub mod driver;
pub mod metrics;

pub use driver::{simulate, Sim};
pub use metrics::{ProcessReport, Schedule, Summary};
