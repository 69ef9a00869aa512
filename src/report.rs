//! Plain-text rendering of a [`Schedule`]: banner, Gantt row and timing table.

use std::io::{self, Write};

use comfy_table::{presets, CellAlignment, Table};

use crate::{
    core::TimeSlice,
    sim::{ProcessReport, Schedule, Summary},
};

const GANTT_CELL: usize = 8;
const IDLE: &str = "idle";
const HEADER: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];

pub fn render_schedule(w: &mut impl Write, schedule: &Schedule) -> io::Result<()> {
    render_title(w, schedule.title())?;
    render_gantt(w, &schedule.timeline)?;
    render_table(w, &schedule.rows, &schedule.summary)
}

pub fn render_title(w: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

pub fn render_gantt(w: &mut impl Write, timeline: &[TimeSlice]) -> io::Result<()> {
    // (label, start) per cell; an idle cell fills any gap before a slice
    let mut cells = Vec::with_capacity(timeline.len());
    let mut prev_stop = 0;
    for slice in timeline {
        if slice.start > prev_stop {
            cells.push((IDLE.to_owned(), prev_stop));
        }
        cells.push((slice.pid.to_string(), slice.start));
        prev_stop = slice.stop;
    }

    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for (label, _) in &cells {
        let pad = " ".repeat(GANTT_CELL.saturating_sub(label.len()) / 2);
        write!(w, "{pad}{label}{pad}|")?;
    }
    writeln!(w)?;

    let bounds: Vec<String> = cells
        .iter()
        .map(|(_, start)| start.to_string())
        .chain(timeline.last().map(|s| s.stop.to_string()))
        .collect();
    writeln!(w, "{}", bounds.join("\t"))?;
    writeln!(w)
}

pub fn render_table(w: &mut impl Write, rows: &[ProcessReport], summary: &Summary) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL)
        .set_header(HEADER.map(str::to_uppercase));
    for r in rows {
        table.add_row([
            r.id().to_string(),
            r.process.priority.to_string(),
            r.process.burst.to_string(),
            r.process.arrival_time.to_string(),
            r.wait.to_string(),
            r.turnaround().to_string(),
            r.exit.to_string(),
        ]);
    }
    table.add_row([
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("AVERAGE\n{:.2}", summary.mean_wait),
        format!("AVERAGE\n{:.2}", summary.mean_turnaround),
        format!("THROUGHPUT\n{:.2}/t", summary.throughput),
    ]);
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }

    writeln!(w, "{table}")?;
    writeln!(w)
}
