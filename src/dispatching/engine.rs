//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence: the next rule is consulted only when the
//! previous one ties. When every rule ties, the earlier position in the
//! input slice wins, so results never depend on sort internals.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchingRule};
use crate::models::ProcessState;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use schedsim::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Srpt)
///     .with_tie_breaker(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["SRPT", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules, every comparison ties and input order decides.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts states by priority (highest priority first).
    ///
    /// Returns indices into `states`. The sort is stable, so equal
    /// processes keep their input order.
    pub fn sort_indices(&self, states: &[ProcessState], context: &DispatchContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..states.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&states[a], &states[b], context));
        indices
    }

    /// Returns the index of the best process that is ready at
    /// `context.current_time`, or `None` if nothing is ready.
    pub fn select_ready(
        &self,
        states: &[ProcessState],
        context: &DispatchContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, state) in states.iter().enumerate() {
            if !state.is_ready(context.current_time) {
                continue;
            }
            match best {
                Some(b) if self.compare(state, &states[b], context) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn compare(&self, a: &ProcessState, b: &ProcessState, context: &DispatchContext) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a, context).cmp(&rule.evaluate(b, context)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::Process;

    fn states(processes: &[Process]) -> Vec<ProcessState> {
        processes.iter().map(ProcessState::new).collect()
    }

    #[test]
    fn test_spt_ordering() {
        let s = states(&[
            Process::new(1, 0, 5),
            Process::new(2, 0, 1),
            Process::new(3, 0, 3),
        ]);
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(engine.sort_indices(&s, &DispatchContext::at_time(0)), vec![1, 2, 0]);
    }

    #[test]
    fn test_fifo_sort_is_stable() {
        let s = states(&[
            Process::new(10, 4, 1),
            Process::new(11, 0, 1),
            Process::new(12, 4, 1),
            Process::new(13, 0, 1),
        ]);
        let engine = RuleEngine::new().with_rule(rules::Fifo);
        assert_eq!(engine.sort_indices(&s, &DispatchContext::default()), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_select_ready_skips_unarrived() {
        let s = states(&[Process::new(1, 0, 5), Process::new(2, 3, 1)]);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        // Process 2 is shorter but has not arrived yet
        assert_eq!(engine.select_ready(&s, &DispatchContext::at_time(2)), Some(0));
        assert_eq!(engine.select_ready(&s, &DispatchContext::at_time(3)), Some(1));
    }

    #[test]
    fn test_select_ready_skips_completed() {
        let mut s = states(&[Process::new(1, 0, 1), Process::new(2, 0, 4)]);
        s[0].run_for(0, 1);
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(engine.select_ready(&s, &DispatchContext::at_time(1)), Some(1));
    }

    #[test]
    fn test_select_ready_nothing_ready() {
        let s = states(&[Process::new(1, 5, 1)]);
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(engine.select_ready(&s, &DispatchContext::at_time(0)), None);
        assert_eq!(engine.select_ready(&[], &DispatchContext::at_time(0)), None);
    }

    #[test]
    fn test_tie_breaker() {
        let s = states(&[Process::new(1, 2, 3), Process::new(2, 1, 3)]);
        let ctx = DispatchContext::at_time(5);

        // SPT alone ties, first position wins
        let spt = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(spt.select_ready(&s, &ctx), Some(0));

        // FIFO breaks the tie in favour of the earlier arrival
        let spt_fifo = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo);
        assert_eq!(spt_fifo.select_ready(&s, &ctx), Some(1));
    }

    #[test]
    fn test_empty_engine_keeps_input_order() {
        let s = states(&[Process::new(1, 3, 9), Process::new(2, 0, 1)]);
        let engine = RuleEngine::new();
        assert_eq!(engine.sort_indices(&s, &DispatchContext::default()), vec![0, 1]);
        assert_eq!(engine.select_ready(&s, &DispatchContext::at_time(3)), Some(0));
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::Spt).with_tie_breaker(rules::Fifo);
        assert_eq!(format!("{engine:?}"), "RuleEngine { rules: [\"SPT\", \"FIFO\"] }");
    }
}
