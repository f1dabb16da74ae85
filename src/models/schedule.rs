//! Schedule result model.
//!
//! The output contract shared by all scheduling algorithms: one row of
//! timing figures per process, run-level metrics, and the Gantt timeline.

use serde::{Deserialize, Serialize};

use super::{ProcessId, ProcessState, Tick, Timeline};
use crate::error::ScheduleError;
use crate::scheduler::{Algorithm, ScheduleMetrics};

/// Timing figures of one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub pid: ProcessId,
    /// Priority from the input, if any.
    pub priority: Option<i64>,
    /// Original burst duration.
    pub burst: Tick,
    /// Arrival time.
    pub arrival: Tick,
    /// Time spent ready but not running: `turnaround - burst`.
    pub wait: Tick,
    /// Time from arrival to completion: `exit - arrival`.
    pub turnaround: Tick,
    /// Completion time.
    pub exit: Tick,
    /// Time from arrival to first dispatch.
    pub response: Tick,
}

impl ScheduleRow {
    /// Builds a row from a finished working state.
    ///
    /// Fails with [`ScheduleError::Unfinished`] if the process never
    /// completed.
    pub fn from_state(state: &ProcessState) -> Result<Self, ScheduleError> {
        let process = state.process();
        let (Some(first_dispatch), Some(exit)) = (state.first_dispatch(), state.completion())
        else {
            return Err(ScheduleError::Unfinished(process.id));
        };

        let turnaround = exit - process.arrival_time;
        Ok(Self {
            pid: process.id,
            priority: process.priority,
            burst: process.burst_duration,
            arrival: process.arrival_time,
            wait: turnaround - process.burst_duration,
            turnaround,
            exit,
            response: first_dispatch - process.arrival_time,
        })
    }
}

/// The outcome of one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Report title.
    pub title: String,
    /// One row per process, in arrival order (stable on input order).
    pub rows: Vec<ScheduleRow>,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
    /// CPU occupancy over time.
    pub timeline: Timeline,
}

impl ScheduleResult {
    /// Assembles a result from the final working states of a run.
    pub fn from_states(
        algorithm: Algorithm,
        states: &[ProcessState],
        timeline: Timeline,
    ) -> Result<Self, ScheduleError> {
        let rows = states
            .iter()
            .map(ScheduleRow::from_state)
            .collect::<Result<Vec<_>, _>>()?;
        let metrics = ScheduleMetrics::calculate(&rows, &timeline);

        Ok(Self {
            algorithm,
            title: algorithm.title().to_string(),
            rows,
            metrics,
            timeline,
        })
    }

    /// Finds the row of a process.
    pub fn row_for(&self, pid: ProcessId) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.pid == pid)
    }

    /// Process IDs ordered by completion time.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        let mut rows: Vec<&ScheduleRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.exit);
        rows.into_iter().map(|r| r.pid).collect()
    }
}
