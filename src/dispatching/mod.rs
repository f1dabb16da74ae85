//! Dispatching rules and rule engine.
//!
//! Provides the selection rules the algorithms are built from (FIFO,
//! SPT, SRPT) and a small rule engine that chains them with
//! deterministic tie-breaking.
//!
//! # Usage
//!
//! ```
//! use schedsim::dispatching::{rules, DispatchContext, RuleEngine};
//! use schedsim::models::{Process, ProcessState};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let states: Vec<ProcessState> = [Process::new(1, 0, 5), Process::new(2, 0, 2)]
//!     .iter()
//!     .map(ProcessState::new)
//!     .collect();
//! let best = engine.select_ready(&states, &DispatchContext::at_time(0));
//! assert_eq!(best, Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::ProcessState;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = u64;

/// A dispatching rule that ranks processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should run first. Scores are exact integers, so ties
/// are real ties and fall through to the next rule.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a process given the current dispatch context.
    fn evaluate(&self, state: &ProcessState, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
