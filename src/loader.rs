use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use rustc_hash::FxHashSet;
use tracing::{info, warn};

use crate::{
    core::{Process, Ticks},
    error::{SimError, SimResult},
};

/// Load a process set from a headerless CSV file of
/// `id, burst, arrival[, priority]` records.
pub fn load_processes_csv(path: impl AsRef<Path>) -> SimResult<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let processes = load_processes_reader(file)?;
    info!(path = %path.display(), count = processes.len(), "loaded process set");
    Ok(processes)
}

pub fn load_processes_reader(reader: impl Read) -> SimResult<Vec<Process>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut processes = Vec::new();
    let mut seen = FxHashSet::default();
    // Latest arrival plus all work bounds every exit time
    let mut total_burst: Ticks = 0;
    let mut last_arrival: Ticks = 0;

    for (i, record) in reader.records().enumerate() {
        let record_no = i + 1;
        let process = parse_record(record_no, &record?)?;
        if !seen.insert(process.id) {
            return Err(SimError::DuplicateId {
                record: record_no,
                id: process.id,
            });
        }
        total_burst = total_burst
            .checked_add(process.burst)
            .filter(|total| total.checked_add(last_arrival.max(process.arrival_time)).is_some())
            .ok_or_else(|| SimError::OutOfRange {
                record: record_no,
                field: "burst",
                expected: "small enough for the schedule length to fit in 64 bits",
                value: process.burst as i64,
            })?;
        last_arrival = last_arrival.max(process.arrival_time);
        processes.push(process);
    }

    if processes.is_empty() {
        return Err(SimError::Empty);
    }
    if !processes
        .windows(2)
        .all(|w| w[0].arrival_time <= w[1].arrival_time)
    {
        warn!("process records are not sorted by arrival; FCFS follows input order");
    }

    Ok(processes)
}

fn parse_record(record_no: usize, record: &StringRecord) -> SimResult<Process> {
    if !(3..=4).contains(&record.len()) {
        return Err(SimError::Malformed {
            record: record_no,
            found: record.len(),
        });
    }

    let int = |pos: usize, field: &'static str| -> SimResult<i64> {
        let value = &record[pos];
        value.parse().map_err(|source| SimError::NotAnInteger {
            record: record_no,
            field,
            value: value.to_owned(),
            source,
        })
    };

    let id = int(0, "id")?;
    let burst = int(1, "burst")?;
    let arrival = int(2, "arrival")?;
    let priority = if record.len() == 4 { int(3, "priority")? } else { 0 };

    if burst < 1 {
        return Err(SimError::OutOfRange {
            record: record_no,
            field: "burst",
            expected: "at least 1",
            value: burst,
        });
    }
    if arrival < 0 {
        return Err(SimError::OutOfRange {
            record: record_no,
            field: "arrival",
            expected: "non-negative",
            value: arrival,
        });
    }

    Ok(Process::with_priority(
        id,
        burst.unsigned_abs(),
        arrival.unsigned_abs(),
        priority,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_with_and_without_priority() {
        let input = "1, 5, 0\n2,3,1,4\n\n# trailing comment\n3,2,2\n";
        let processes = load_processes_reader(input.as_bytes()).unwrap();

        assert_eq!(
            processes,
            vec![
                Process::new(1, 5, 0),
                Process::with_priority(2, 3, 1, 4),
                Process::new(3, 2, 2),
            ]
        );
    }

    #[test]
    fn rejects_non_integer_field() {
        let err = load_processes_reader("1,5,0\n2,x,1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SimError::NotAnInteger {
                record: 2,
                field: "burst",
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = load_processes_reader("1,5\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::Malformed { record: 1, found: 2 }));

        let err = load_processes_reader("1,5,0,1,9\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::Malformed { record: 1, found: 5 }));
    }

    #[test]
    fn rejects_invalid_values() {
        let err = load_processes_reader("1,0,0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::OutOfRange { field: "burst", .. }));

        let err = load_processes_reader("1,3,-2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::OutOfRange { field: "arrival", .. }));

        let err = load_processes_reader("1,3,0\n1,2,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::DuplicateId { record: 2, id: 1 }));

        let err = load_processes_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::Empty));
    }

    #[test]
    fn rejects_schedule_longer_than_time_axis() {
        let input = format!("1,{max},0\n2,{max},0\n3,{max},0\n", max = i64::MAX);
        let err = load_processes_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SimError::OutOfRange {
                record: 3,
                field: "burst",
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Data);

        let input = format!("1,{max},0\n2,{max},{max}\n", max = i64::MAX);
        let err = load_processes_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::OutOfRange { record: 2, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_processes_csv("/nonexistent/processes.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
