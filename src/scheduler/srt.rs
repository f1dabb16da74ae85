//! Preemptive shortest-remaining-time, reported as "Priority".
//!
//! The report title is "Priority" for continuity with existing output,
//! but selection is by remaining burst duration. The `priority` field of
//! a process is never consulted.
//!
//! # Algorithm
//!
//! 1. Stably sort processes by arrival time.
//! 2. Every time unit, pick the ready process with the least remaining
//!    burst (SRPT); ties go to the earlier arrival, then the earlier
//!    position. Run it for one unit.
//! 3. If nothing is ready, idle until the next arrival.
//!
//! Wait time is `turnaround - burst`, i.e. every unit spent ready but not
//! running, including units lost to preemption.

use tracing::{debug, info_span, trace};

use super::{finish, next_arrival, prepare, Algorithm, Scheduler};
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult, Tick, Timeline};

/// Preemptive shortest-remaining-time scheduler.
#[derive(Debug, Clone)]
pub struct ShortestRemainingTime {
    engine: RuleEngine,
}

impl ShortestRemainingTime {
    /// Creates the scheduler with SRPT selection and FIFO tie-breaking.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::Srpt)
                .with_tie_breaker(rules::Fifo),
        }
    }
}

impl Default for ShortestRemainingTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ShortestRemainingTime {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestRemainingTime
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        let _span = info_span!(
            "schedule",
            algorithm = %self.algorithm(),
            processes = processes.len()
        )
        .entered();

        let mut states = prepare(processes)?;
        let mut timeline = Timeline::new();
        let mut clock: Tick = 0;
        let mut running = None;

        loop {
            let context = DispatchContext::at_time(clock);
            if let Some(i) = self.engine.select_ready(&states, &context) {
                let state = &mut states[i];
                if running != Some(state.id()) {
                    debug!(
                        pid = state.id(),
                        at = clock,
                        remaining = state.remaining(),
                        "dispatched"
                    );
                    running = Some(state.id());
                }
                state.run_for(clock, 1);
                timeline.push_run(state.id(), clock, clock + 1);
                clock += 1;
                if state.is_complete() {
                    trace!(pid = state.id(), at = clock, "completed");
                }
            } else if let Some(next) = next_arrival(&states, clock) {
                debug!(from = clock, until = next, "idle");
                running = None;
                clock = next;
            } else {
                break;
            }
        }

        finish(self.algorithm(), &states, timeline)
    }
}
