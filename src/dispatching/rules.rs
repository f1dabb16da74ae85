//! Built-in dispatching rules.
//!
//! | Rule | Score | Used by |
//! |------|-------|---------|
//! | FIFO | arrival time | FCFS ordering, tie-breaking |
//! | SPT | full burst duration | SJF |
//! | SRPT | remaining burst duration | shortest-remaining-time |
//!
//! All rules return lower scores for processes that should run first.

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::ProcessState;

/// First In First Out.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, state: &ProcessState, _context: &DispatchContext) -> RuleScore {
        state.process().arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time.
///
/// Ranks by the *full* burst duration, regardless of progress. Minimizes
/// mean flow time on a single machine when all jobs are available.
///
/// # Reference
/// Smith (1956), "Various optimizers for single-stage production"
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, state: &ProcessState, _context: &DispatchContext) -> RuleScore {
        state.process().burst_duration
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Shortest Remaining Processing Time.
///
/// Ranks by the burst still outstanding. Re-evaluated every time unit,
/// this gives preemptive shortest-remaining-time scheduling.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl DispatchingRule for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, state: &ProcessState, _context: &DispatchContext) -> RuleScore {
        state.remaining()
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}
