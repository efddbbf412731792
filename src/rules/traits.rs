use crate::domain::Rule;
use std::fmt::Debug;

/// Read-only source of rules for the evaluator.
///
/// Implementations are fixed once built; the evaluator may be shared across
/// concurrent requests without locking.
pub trait RuleStore: Send + Sync + Debug {
    /// Every rule, in store order. Store order breaks priority ties.
    fn all_rules(&self) -> &[Rule];
}
