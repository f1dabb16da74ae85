//! CPU scheduling algorithms and KPI evaluation.
//!
//! Four single-CPU disciplines behind one [`Scheduler`] trait:
//!
//! | Algorithm | Type | Preemptive | Selection |
//! |-----------|------|------------|-----------|
//! | First-come, first-serve | [`FirstComeFirstServed`] | no | arrival order |
//! | Shortest-job-first | [`ShortestJobFirst`] | no | full burst (SPT) |
//! | Priority | [`ShortestRemainingTime`] | every unit | remaining burst (SRPT) |
//! | Round-robin | [`RoundRobin`] | every quantum | FIFO ready queue |
//!
//! Each call to [`Scheduler::schedule`] validates the input and builds a
//! private working copy of it, so runs are independent and repeatable.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;
mod srt;

pub use fcfs::FirstComeFirstServed;
pub use kpi::ScheduleMetrics;
pub use round_robin::RoundRobin;
pub use sjf::ShortestJobFirst;
pub use srt::ShortestRemainingTime;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Process, ProcessState, ScheduleResult, Tick, Timeline};
use crate::validation::validate_processes;

/// A CPU scheduling discipline.
pub trait Scheduler: fmt::Debug {
    /// Which algorithm this is.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the algorithm over `processes`.
    ///
    /// The input is never modified. Fails if the process set does not
    /// pass [`validate_processes`].
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError>;
}

/// The available scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come, first-serve.
    Fcfs,
    /// Non-preemptive shortest-job-first.
    Sjf,
    /// Preemptive shortest-remaining-time, titled "Priority".
    ShortestRemainingTime,
    /// Round-robin.
    RoundRobin,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::ShortestRemainingTime,
        Algorithm::RoundRobin,
    ];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::ShortestRemainingTime => "priority",
            Algorithm::RoundRobin => "rr",
        }
    }

    /// Report title.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::Sjf => "Shortest-job-first",
            Algorithm::ShortestRemainingTime => "Priority",
            Algorithm::RoundRobin => "Round-robin",
        }
    }

    /// Builds a scheduler for this algorithm.
    ///
    /// `quantum` only affects round-robin.
    pub fn scheduler(&self, quantum: Tick) -> Box<dyn Scheduler> {
        match self {
            Algorithm::Fcfs => Box::new(FirstComeFirstServed::new()),
            Algorithm::Sjf => Box::new(ShortestJobFirst::new()),
            Algorithm::ShortestRemainingTime => Box::new(ShortestRemainingTime::new()),
            Algorithm::RoundRobin => Box::new(RoundRobin::with_quantum(quantum)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "priority" | "srt" => Ok(Algorithm::ShortestRemainingTime),
            "rr" | "round-robin" => Ok(Algorithm::RoundRobin),
            other => Err(format!(
                "unknown algorithm '{other}' (expected fcfs, sjf, priority or rr)"
            )),
        }
    }
}

/// Runs each scheduler over the same process set, in order.
///
/// Every run gets its own working copy; a later run never sees an earlier
/// run's progress.
pub fn run_all(
    schedulers: &[Box<dyn Scheduler>],
    processes: &[Process],
) -> Result<Vec<ScheduleResult>, ScheduleError> {
    schedulers.iter().map(|s| s.schedule(processes)).collect()
}

/// Validates `processes` and returns fresh working states sorted by
/// arrival time, stable on input order.
pub(crate) fn prepare(processes: &[Process]) -> Result<Vec<ProcessState>, ScheduleError> {
    validate_processes(processes)?;

    let states: Vec<ProcessState> = processes.iter().map(ProcessState::new).collect();
    let order = RuleEngine::new()
        .with_rule(rules::Fifo)
        .sort_indices(&states, &DispatchContext::default());
    Ok(order.into_iter().map(|i| states[i].clone()).collect())
}

/// Earliest arrival strictly after `now` among incomplete processes.
pub(crate) fn next_arrival(states: &[ProcessState], now: Tick) -> Option<Tick> {
    states
        .iter()
        .filter(|s| !s.is_complete())
        .map(|s| s.process().arrival_time)
        .filter(|&arrival| arrival > now)
        .min()
}

/// Assembles the result of a finished run and logs its summary.
pub(crate) fn finish(
    algorithm: Algorithm,
    states: &[ProcessState],
    timeline: Timeline,
) -> Result<ScheduleResult, ScheduleError> {
    let result = ScheduleResult::from_states(algorithm, states, timeline)?;
    info!(
        algorithm = %algorithm,
        makespan = result.metrics.makespan,
        average_wait = result.metrics.average_wait,
        average_turnaround = result.metrics.average_turnaround,
        throughput = result.metrics.throughput,
        "schedule complete"
    );
    Ok(result)
}
