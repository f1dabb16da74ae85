//! Input validation for process sets.
//!
//! Checks structural integrity of the process registry before any
//! algorithm runs. Detects:
//! - An empty process set (throughput would be undefined)
//! - Duplicate process IDs
//! - Zero burst durations (a process that never needs the CPU)
//! - Time horizons that do not fit in a [`Tick`]
//!
//! Every problem is reported, not just the first.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Process, Tick};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has a burst duration of zero.
    ZeroBurst,
    /// Latest arrival plus total burst exceeds the representable time range.
    HorizonOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst duration is positive
/// 4. `max(arrival) + sum(burst)` fits in a [`Tick`], which bounds every
///    completion time any algorithm can produce
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "no processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("process {} has a burst duration of zero", p.id),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "latest arrival plus total burst duration overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn horizon(processes: &[Process]) -> Option<Tick> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_duration))
}
