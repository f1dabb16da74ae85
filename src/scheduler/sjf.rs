//! Shortest-Job-First, non-preemptive.
//!
//! # Algorithm
//!
//! 1. Stably sort processes by arrival time.
//! 2. Whenever the CPU is free, pick the ready process with the smallest
//!    *full* burst duration (SPT); ties go to the earlier arrival, then
//!    the earlier position.
//! 3. Run it to completion. If nothing is ready, idle until the next
//!    arrival.
//!
//! Every process therefore occupies exactly one timeline slice.

use tracing::{debug, info_span};

use super::{finish, next_arrival, prepare, Algorithm, Scheduler};
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult, Tick, Timeline};

/// Non-preemptive shortest-job-first scheduler.
#[derive(Debug, Clone)]
pub struct ShortestJobFirst {
    engine: RuleEngine,
}

impl ShortestJobFirst {
    /// Creates the scheduler with SPT selection and FIFO tie-breaking.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::Spt)
                .with_tie_breaker(rules::Fifo),
        }
    }
}

impl Default for ShortestJobFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ShortestJobFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
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

        loop {
            let context = DispatchContext::at_time(clock);
            if let Some(i) = self.engine.select_ready(&states, &context) {
                let state = &mut states[i];
                let burst = state.remaining();
                let ran = state.run_for(clock, burst);
                timeline.push_run(state.id(), clock, clock + ran);
                debug!(pid = state.id(), start = clock, stop = clock + ran, "dispatched");
                clock += ran;
            } else if let Some(next) = next_arrival(&states, clock) {
                debug!(from = clock, until = next, "idle");
                clock = next;
            } else {
                break;
            }
        }

        finish(self.algorithm(), &states, timeline)
    }
}
