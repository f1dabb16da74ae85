//! Dispatch context for rule evaluation.

use crate::models::Tick;

/// Simulation state passed to dispatching rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation time.
    pub current_time: Tick,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Tick) -> Self {
        Self { current_time }
    }
}
