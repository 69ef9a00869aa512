use average::{Estimate, Mean};

use crate::{
    core::{Process, ProcessId, Ticks, TimeSlice},
    scheduler::Algorithm,
};

/// Final timings of one process under one discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessReport {
    pub process: Process,
    pub wait: Ticks,
    pub exit: Ticks,
}

impl ProcessReport {
    pub fn id(&self) -> ProcessId {
        self.process.id
    }

    pub fn turnaround(&self) -> Ticks {
        self.wait.saturating_add(self.process.burst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean_wait: f64,
    pub mean_turnaround: f64,
    /// Processes completed per time unit, over `[0, final completion]`.
    pub throughput: f64,
}

impl Summary {
    pub fn from_rows(rows: &[ProcessReport]) -> Self {
        let final_completion = rows.iter().map(|r| r.exit).max().unwrap_or(0);
        let throughput = if final_completion == 0 {
            0.0
        } else {
            rows.len() as f64 / final_completion as f64
        };

        Self {
            mean_wait: avg(rows.iter().map(|r| r.wait as f64)),
            mean_turnaround: avg(rows.iter().map(|r| r.turnaround() as f64)),
            throughput,
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

/// Everything one discipline produced for a process set.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub algorithm: Algorithm,
    pub timeline: Vec<TimeSlice>,
    pub rows: Vec<ProcessReport>,
    pub summary: Summary,
}

impl Schedule {
    pub fn new(algorithm: Algorithm, timeline: Vec<TimeSlice>, rows: Vec<ProcessReport>) -> Self {
        let summary = Summary::from_rows(&rows);
        Self {
            algorithm,
            timeline,
            rows,
            summary,
        }
    }

    pub fn title(&self) -> &'static str {
        self.algorithm.title()
    }

    pub fn final_completion(&self) -> Ticks {
        self.rows.iter().map(|r| r.exit).max().unwrap_or(0)
    }

    pub fn row(&self, pid: ProcessId) -> Option<&ProcessReport> {
        self.rows.iter().find(|r| r.id() == pid)
    }
}
