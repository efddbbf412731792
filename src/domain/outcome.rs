use super::{Decision, Rule};

/// Message shown when no rule matches the applicant.
pub const NO_MATCH_MESSAGE: &str = "No matching rule found. Applicant not eligible.";

/// Result of evaluating one applicant against the rule store.
///
/// `NoMatch` is a regular outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    Matched {
        decision: Decision,
        reason: String,
        rule_name: String,
    },
    NoMatch,
}

impl EvaluationResult {
    /// Result carrying the winning rule's action.
    pub fn from_rule(rule: &Rule) -> Self {
        EvaluationResult::Matched {
            decision: rule.action.decision,
            reason: rule.action.reason.clone(),
            rule_name: rule.name.clone(),
        }
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, EvaluationResult::Matched { .. })
    }

    pub fn decision(&self) -> Option<Decision> {
        match self {
            EvaluationResult::Matched { decision, .. } => Some(*decision),
            EvaluationResult::NoMatch => None,
        }
    }

    pub fn rule_name(&self) -> Option<&str> {
        match self {
            EvaluationResult::Matched { rule_name, .. } => Some(rule_name),
            EvaluationResult::NoMatch => None,
        }
    }

    /// One-line summary for display.
    pub fn message(&self) -> String {
        match self {
            EvaluationResult::Matched { decision, .. } => format!("Decision: {}", decision),
            EvaluationResult::NoMatch => NO_MATCH_MESSAGE.to_string(),
        }
    }
}
