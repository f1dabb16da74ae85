//! Schedule quality metrics (KPIs).
//!
//! Computes run-level performance indicators from the per-process rows
//! and the timeline of a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | Mean of `turnaround - burst` |
//! | Average turnaround | Mean of `exit - arrival` |
//! | Average response | Mean of `first dispatch - arrival` |
//! | Maximum wait | Largest single wait |
//! | Makespan | Latest completion time |
//! | Throughput | `process count / makespan` |
//! | CPU utilization | `busy time / makespan` |

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleRow, Tick, Timeline};

/// Run-level performance indicators.
///
/// All time values are in simulation time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of processes scheduled.
    pub process_count: usize,
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean response time.
    pub average_response: f64,
    /// Longest wait of any single process.
    pub max_wait: Tick,
    /// Latest completion time.
    pub makespan: Tick,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from the rows and timeline of a run.
    ///
    /// An empty run yields all-zero metrics.
    pub fn calculate(rows: &[ScheduleRow], timeline: &Timeline) -> Self {
        let process_count = rows.len();
        let makespan = rows.iter().map(|r| r.exit).max().unwrap_or(0);

        Self {
            process_count,
            average_wait: mean(rows.iter().map(|r| r.wait), process_count),
            average_turnaround: mean(rows.iter().map(|r| r.turnaround), process_count),
            average_response: mean(rows.iter().map(|r| r.response), process_count),
            max_wait: rows.iter().map(|r| r.wait).max().unwrap_or(0),
            makespan,
            throughput: ratio(process_count as f64, makespan),
            cpu_utilization: ratio(timeline.busy_time() as f64, makespan),
        }
    }
}

fn mean(values: impl Iterator<Item = Tick>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.map(|v| v as f64).sum::<f64>() / count as f64
}

fn ratio(numerator: f64, makespan: Tick) -> f64 {
    if makespan == 0 {
        0.0
    } else {
        numerator / makespan as f64
    }
}
