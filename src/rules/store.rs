use crate::domain::Rule;
use crate::rules::traits::RuleStore;

/// Rule store backed by the rules compiled at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticRuleStore {
    rules: Vec<Rule>,
}

impl StaticRuleStore {
    pub fn new(rules: Vec<Rule>) -> Self {
        StaticRuleStore { rules }
    }

    /// Create an empty store. Every evaluation against it yields no match.
    pub fn empty() -> Self {
        StaticRuleStore::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleStore for StaticRuleStore {
    fn all_rules(&self) -> &[Rule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Action, Decision};
    use smallvec::SmallVec;

    fn rule(name: &str, priority: i64) -> Rule {
        Rule {
            name: name.to_string(),
            priority,
            conditions: SmallVec::new(),
            action: Action {
                decision: Decision::Review,
                reason: String::new(),
            },
        }
    }

    #[test]
    fn test_store_preserves_order() {
        let store = StaticRuleStore::new(vec![rule("b", 1), rule("a", 9), rule("c", 5)]);

        let names: Vec<&str> = store.all_rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = StaticRuleStore::empty();
        assert!(store.is_empty());
        assert!(store.all_rules().is_empty());
    }
}
