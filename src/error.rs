use std::{io, num::ParseIntError, path::PathBuf};

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened or read.
    Io,
    /// The input was readable but does not describe a valid process set.
    Data,
}

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("cannot open process file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading process records: {0}")]
    Read(#[from] csv::Error),

    #[error("record {record}: expected 3 or 4 fields (id, burst, arrival[, priority]), found {found}")]
    Malformed { record: usize, found: usize },

    #[error("record {record}: {field} {value:?} is not an integer: {source}")]
    NotAnInteger {
        record: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("record {record}: {field} must be {expected}, got {value}")]
    OutOfRange {
        record: usize,
        field: &'static str,
        expected: &'static str,
        value: i64,
    },

    #[error("record {record}: process id {id} already used")]
    DuplicateId { record: usize, id: i64 },

    #[error("no process records found")]
    Empty,
}

impl SimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::Open { .. } => ErrorKind::Io,
            SimError::Read(err) if err.is_io_error() => ErrorKind::Io,
            _ => ErrorKind::Data,
        }
    }
}
