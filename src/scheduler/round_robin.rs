//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Stably sort processes by arrival time; admit each one to the tail
//!    of a FIFO ready queue once its arrival time is reached.
//! 2. Dequeue the head and run it for `min(quantum, remaining)` units.
//! 3. Admit everything that arrived during that slice, then put the
//!    preempted process back at the tail unless it completed.
//! 4. With an empty queue and processes still to arrive, idle until the
//!    next arrival.
//!
//! New arrivals therefore enter the queue ahead of the process that was
//! just preempted.

use std::collections::VecDeque;

use tracing::{debug, info_span};

use super::{finish, prepare, Algorithm, Scheduler};
use crate::error::ScheduleError;
use crate::models::{Process, ProcessState, ScheduleResult, Tick, Timeline};

/// Round-robin scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Tick,
}

impl RoundRobin {
    /// Default time quantum.
    pub const DEFAULT_QUANTUM: Tick = 1;

    /// Creates a round-robin scheduler with a quantum of one time unit.
    pub fn new() -> Self {
        Self::with_quantum(Self::DEFAULT_QUANTUM)
    }

    /// Creates a round-robin scheduler with the given quantum.
    ///
    /// A quantum of zero is rejected when scheduling.
    pub fn with_quantum(quantum: Tick) -> Self {
        Self { quantum }
    }

    /// The time quantum.
    pub fn quantum(&self) -> Tick {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        let _span = info_span!(
            "schedule",
            algorithm = %self.algorithm(),
            processes = processes.len(),
            quantum = self.quantum
        )
        .entered();

        if self.quantum == 0 {
            return Err(ScheduleError::ZeroQuantum);
        }

        let mut states = prepare(processes)?;
        let mut timeline = Timeline::new();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(states.len());
        let mut admitted = 0;
        let mut clock: Tick = 0;

        loop {
            admit(&states, &mut admitted, clock, &mut queue);

            let Some(i) = queue.pop_front() else {
                match states.get(admitted) {
                    Some(next) => {
                        let arrival = next.process().arrival_time;
                        debug!(from = clock, until = arrival, "idle");
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let state = &mut states[i];
            let ran = state.run_for(clock, self.quantum);
            timeline.push_run(state.id(), clock, clock + ran);
            debug!(pid = state.id(), start = clock, stop = clock + ran, "dispatched");
            clock += ran;

            let complete = state.is_complete();
            admit(&states, &mut admitted, clock, &mut queue);
            if !complete {
                queue.push_back(i);
            }
        }

        finish(self.algorithm(), &states, timeline)
    }
}

/// Enqueues every not-yet-admitted process that has arrived by `clock`.
///
/// `states` is sorted by arrival, so admission is a moving cursor.
fn admit(states: &[ProcessState], admitted: &mut usize, clock: Tick, queue: &mut VecDeque<usize>) {
    while let Some(state) = states.get(*admitted) {
        if !state.process().has_arrived(clock) {
            break;
        }
        queue.push_back(*admitted);
        *admitted += 1;
    }
}
