//! Per-algorithm working state.
//!
//! Every algorithm run owns its own `Vec<ProcessState>`. The original
//! process is kept immutable next to the mutable remaining burst, so the
//! original burst is always available for reporting and no run can see
//! another run's progress.

use super::{Process, ProcessId, Tick};

/// Mutable simulation state of one process.
///
/// Dispatch and completion times are explicit options: a first dispatch
/// at t=0 is distinguishable from "never dispatched".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    process: Process,
    remaining: Tick,
    first_dispatch: Option<Tick>,
    completion: Option<Tick>,
}

impl ProcessState {
    /// Creates a fresh working state from an input process.
    pub fn new(process: &Process) -> Self {
        Self {
            process: process.clone(),
            remaining: process.burst_duration,
            first_dispatch: None,
            completion: None,
        }
    }

    /// The original, unmodified process.
    pub fn process(&self) -> &Process {
        &self.process
    }

    /// Shorthand for `process().id`.
    #[inline]
    pub fn id(&self) -> ProcessId {
        self.process.id
    }

    /// CPU time still required.
    #[inline]
    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    /// Time of the first dispatch, if any.
    pub fn first_dispatch(&self) -> Option<Tick> {
        self.first_dispatch
    }

    /// Completion time, if completed.
    pub fn completion(&self) -> Option<Tick> {
        self.completion
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// Whether the process has arrived and still needs CPU time at `now`.
    #[inline]
    pub fn is_ready(&self, now: Tick) -> bool {
        !self.is_complete() && self.process.has_arrived(now)
    }

    /// Runs the process for up to `ticks` units starting at `now`.
    ///
    /// Records the first dispatch and, when the remaining burst reaches
    /// zero, the completion time. Returns the units actually consumed,
    /// which is `min(ticks, remaining)`.
    pub fn run_for(&mut self, now: Tick, ticks: Tick) -> Tick {
        let ran = ticks.min(self.remaining);
        if ran == 0 {
            return 0;
        }
        self.first_dispatch.get_or_insert(now);
        self.remaining -= ran;
        if self.remaining == 0 {
            self.completion = Some(now + ran);
        }
        ran
    }
}
