use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Decision, EvaluationResult, FactsError, Rule};

/// Whether any rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Matched,
    NoMatch,
}

/// Response from an evaluation.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    /// Identifier for correlating with logs
    pub evaluation_id: Uuid,

    pub status: MatchStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Name of the rule that produced the decision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,

    /// Human-readable summary
    pub message: String,

    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationResponse {
    /// Create a response for an evaluation result.
    pub fn new(evaluation_id: Uuid, result: &EvaluationResult) -> Self {
        let message = result.message();
        let (status, decision, reason, rule_name) = match result {
            EvaluationResult::Matched {
                decision,
                reason,
                rule_name,
            } => (
                MatchStatus::Matched,
                Some(*decision),
                Some(reason.clone()),
                Some(rule_name.clone()),
            ),
            EvaluationResult::NoMatch => (MatchStatus::NoMatch, None, None, None),
        };

        EvaluationResponse {
            evaluation_id,
            status,
            decision,
            reason,
            rule_name,
            message,
            evaluated_at: Utc::now(),
        }
    }
}

/// Loaded rules, in store order.
#[derive(Debug, Serialize)]
pub struct RulesResponse<'a> {
    pub count: usize,
    pub rules: &'a [Rule],
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub rule_count: usize,
    pub uptime_secs: u64,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub rules: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ErrorResponse::new(message, "BAD_REQUEST")
    }

    pub fn invalid_facts(err: &FactsError) -> Self {
        ErrorResponse::new(err.to_string(), "INVALID_FACTS")
    }
}
