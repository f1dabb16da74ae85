//! Process model.
//!
//! A process is the unit of work handed to every scheduling algorithm.
//! It is created once at load time and never mutated afterwards;
//! algorithms track their progress in a separate [`ProcessState`].
//!
//! [`ProcessState`]: super::ProcessState

use serde::{Deserialize, Serialize};

/// Caller-supplied process identifier.
pub type ProcessId = i64;

/// Discrete simulation time, in abstract time units.
pub type Tick = u64;

/// A process to be scheduled.
///
/// # Time Representation
/// Arrival and burst are whole time units relative to the start of the
/// simulation (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: Tick,
    /// Total CPU time required to run to completion (> 0).
    pub burst_duration: Tick,
    /// Optional priority from the input. Reported, never used for selection.
    pub priority: Option<i64>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: ProcessId, arrival_time: Tick, burst_duration: Tick) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has arrived by time `now`.
    #[inline]
    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival_time <= now
    }
}
