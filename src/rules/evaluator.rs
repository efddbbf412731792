use std::sync::Arc;
use tracing::debug;

use crate::domain::{EvaluationResult, Facts, Rule};
use crate::rules::traits::RuleStore;

/// Pick the winning rule for `facts`.
///
/// Every rule whose conditions all hold is a match. The match with the
/// highest priority wins; among equal priorities the one earliest in `rules`
/// wins. No match yields [`EvaluationResult::NoMatch`].
pub fn evaluate(rules: &[Rule], facts: &Facts) -> EvaluationResult {
    let mut best: Option<&Rule> = None;
    let mut matched = 0usize;

    for rule in rules.iter().filter(|rule| rule.matches(facts)) {
        matched += 1;
        // Strict comparison keeps the first-seen rule on ties.
        if best.map_or(true, |current| rule.priority > current.priority) {
            best = Some(rule);
        }
    }

    debug!(
        rules = rules.len(),
        matched,
        winner = best.map(|r| r.name.as_str()),
        "Rules evaluated"
    );

    best.map_or(EvaluationResult::NoMatch, EvaluationResult::from_rule)
}

/// Evaluator bound to an injected rule store.
#[derive(Debug, Clone)]
pub struct Evaluator {
    store: Arc<dyn RuleStore>,
}

impl Evaluator {
    pub fn new(store: Arc<dyn RuleStore>) -> Self {
        Evaluator { store }
    }

    /// Evaluate `facts` against every rule in the store.
    pub fn evaluate(&self, facts: &Facts) -> EvaluationResult {
        evaluate(self.store.all_rules(), facts)
    }

    pub fn rules(&self) -> &[Rule] {
        self.store.all_rules()
    }

    pub fn rule_count(&self) -> usize {
        self.store.all_rules().len()
    }
}
