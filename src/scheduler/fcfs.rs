//! First-come, first-served. Non-preemptive, so there is nothing to decide
//! tick by tick: each process runs to completion in input order.

use tracing::debug;

use super::Algorithm;
use crate::{
    core::{Process, Ticks, TimeSlice},
    sim::{ProcessReport, Schedule},
};

pub const NAME: &str = "First-come, first-serve";

pub fn schedule(processes: &[Process]) -> Schedule {
    let mut clock: Ticks = 0;
    let mut timeline = Vec::with_capacity(processes.len());
    let mut rows = Vec::with_capacity(processes.len());

    for &process in processes {
        // CPU sits idle until a late arrival shows up
        let start = clock.max(process.arrival_time);
        let wait = start - process.arrival_time;
        let exit = start.saturating_add(process.burst);
        debug!(pid = process.id, start, exit, wait, "fcfs slice");

        timeline.push(TimeSlice::new(process.id, start, exit));
        rows.push(ProcessReport {
            process,
            wait,
            exit,
        });
        clock = exit;
    }

    Schedule::new(Algorithm::Fcfs, timeline, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_in_input_order() {
        let schedule = schedule(&[
            Process::new(1, 5, 0),
            Process::new(2, 3, 1),
            Process::new(3, 2, 2),
        ]);

        let waits: Vec<_> = schedule.rows.iter().map(|r| r.wait).collect();
        let exits: Vec<_> = schedule.rows.iter().map(|r| r.exit).collect();
        assert_eq!(waits, [0, 4, 6]);
        assert_eq!(exits, [5, 8, 10]);
        assert_eq!(
            schedule.timeline,
            [
                TimeSlice::new(1, 0, 5),
                TimeSlice::new(2, 5, 8),
                TimeSlice::new(3, 8, 10),
            ]
        );
    }

    #[test]
    fn idle_gap_before_late_arrival() {
        let schedule = schedule(&[
            Process::new(1, 2, 0),
            Process::new(2, 3, 10),
            Process::new(3, 1, 11),
        ]);

        assert_eq!(schedule.rows[1].wait, 0);
        assert_eq!(schedule.rows[1].exit, 13);
        assert_eq!(schedule.rows[2].wait, 2);
        assert_eq!(schedule.rows[2].exit, 14);
        assert_eq!(schedule.timeline[1], TimeSlice::new(2, 10, 13));
    }
}
