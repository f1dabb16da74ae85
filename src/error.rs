//! Error types.
//!
//! Library errors are typed enums; the binary wraps them with `anyhow`
//! context before reporting.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ProcessId;
use crate::validation::ValidationError;

/// Errors raised by scheduling algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The process set failed validation.
    #[error("invalid process set: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    /// A round-robin quantum of zero would never make progress.
    #[error("round-robin quantum must be at least one time unit")]
    ZeroQuantum,

    /// The simulation ended while a process was still incomplete.
    #[error("process {0} did not complete")]
    Unfinished(ProcessId),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Invalid(errors)
    }
}

/// Errors raised while reading process records.
#[derive(Error, Debug)]
pub enum InputError {
    /// The process file could not be opened or read.
    #[error("error reading scheduling file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a non-file source failed.
    #[error("error reading process records")]
    Read(#[from] io::Error),

    /// The first record has an unsupported number of fields.
    #[error("line {line}: expected 3 or 4 fields (id,burst,arrival[,priority]), found {found}")]
    FieldCount { line: usize, found: usize },

    /// A record's field count differs from the first record's.
    #[error("line {line}: wrong number of fields, expected {expected}, found {found}")]
    InconsistentFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A field is not an integer.
    #[error("line {line}: invalid {field} {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A time field is negative.
    #[error("line {line}: {field} must not be negative, found {value}")]
    Negative {
        line: usize,
        field: &'static str,
        value: i64,
    },
}

/// Errors raised while parsing the command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a process file nor `--random` was given.
    #[error("must give a scheduling file to process")]
    MissingInput,

    /// Both a file and `--random`, or more than one file, were given.
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),

    /// An option that this program does not know.
    #[error("unknown option {0:?}")]
    UnknownOption(String),

    /// An option that requires a value was last on the command line.
    #[error("option {0} requires a value")]
    MissingValue(String),

    /// An option value could not be interpreted.
    #[error("invalid value {value:?} for {option}: {reason}")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_message_lists_every_problem() {
        let err = ScheduleError::Invalid(vec![
            ValidationError::new(ValidationErrorKind::ZeroBurst, "process 1 has a zero burst"),
            ValidationError::new(ValidationErrorKind::DuplicateId, "duplicate process ID: 2"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process set: process 1 has a zero burst; duplicate process ID: 2"
        );
    }

    #[test]
    fn test_parse_error_names_line_and_field() {
        let source = "x".parse::<i64>().unwrap_err();
        let err = InputError::Parse {
            line: 3,
            field: "burst",
            value: "x".into(),
            source,
        };
        assert_eq!(err.to_string(), "line 3: invalid burst \"x\"");
    }

    #[test]
    fn test_cause_is_chained_not_repeated() {
        let source = "x".parse::<i64>().unwrap_err();
        let cause = source.to_string();
        let err = InputError::Parse {
            line: 1,
            field: "id",
            value: "x".into(),
            source,
        };
        assert!(!err.to_string().contains(&cause));
        let chained = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(chained, Some(cause));

        let io = InputError::Io {
            path: PathBuf::from("procs.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(io.to_string(), "error reading scheduling file procs.csv");
        assert_eq!(
            format!("{:#}", anyhow::Error::new(io)),
            "error reading scheduling file procs.csv: no such file"
        );
    }
}
