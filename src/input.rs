//! Process file ingestion.
//!
//! # Format
//!
//! One process per line, comma-separated:
//!
//! ```text
//! id,burst,arrival[,priority]
//! ```
//!
//! Fields are trimmed and may be wrapped in double quotes (`"1","5","0"`);
//! quoted fields cannot contain commas. Blank lines are skipped. Every
//! record must have the same number of fields as the first one, which must
//! be 3 or 4.
//! Burst and arrival must be non-negative; whether a burst is positive is
//! checked later by [`validate_processes`](crate::validation::validate_processes).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::InputError;
use crate::models::{Process, Tick};

/// Reads processes from a file.
pub fn load_processes_from_path(path: impl AsRef<Path>) -> Result<Vec<Process>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let processes = load_processes(BufReader::new(file))?;
    debug!(path = %path.display(), count = processes.len(), "loaded processes");
    Ok(processes)
}

/// Reads processes from any buffered reader.
pub fn load_processes<R: BufRead>(reader: R) -> Result<Vec<Process>, InputError> {
    let mut processes = Vec::new();
    let mut expected_fields = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(unquote).collect();
        match expected_fields {
            None if !(3..=4).contains(&fields.len()) => {
                return Err(InputError::FieldCount {
                    line: line_no,
                    found: fields.len(),
                });
            }
            None => expected_fields = Some(fields.len()),
            Some(expected) if expected != fields.len() => {
                return Err(InputError::InconsistentFields {
                    line: line_no,
                    expected,
                    found: fields.len(),
                });
            }
            Some(_) => {}
        }

        let process = Process::new(
            parse_int(line_no, "id", fields[0])?,
            parse_time(line_no, "arrival", fields[2])?,
            parse_time(line_no, "burst", fields[1])?,
        );
        processes.push(match fields.get(3) {
            Some(raw) => process.with_priority(parse_int(line_no, "priority", raw)?),
            None => process,
        });
    }

    Ok(processes)
}

fn unquote(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map_or(raw, str::trim)
}

fn parse_int(line: usize, field: &'static str, raw: &str) -> Result<i64, InputError> {
    raw.parse().map_err(|source| InputError::Parse {
        line,
        field,
        value: raw.to_string(),
        source,
    })
}

fn parse_time(line: usize, field: &'static str, raw: &str) -> Result<Tick, InputError> {
    let value = parse_int(line, field, raw)?;
    Tick::try_from(value).map_err(|_| InputError::Negative { line, field, value })
}
