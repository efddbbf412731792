use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Decision;

/// Rule book as written in YAML, before field and operator names are resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleBook {
    /// Rule definitions, in store order
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

/// Definition of a single rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDef {
    /// Display name, unique within the book
    pub name: String,

    /// Higher wins when several rules match
    pub priority: i64,

    /// Conditions, all of which must hold
    #[serde(default)]
    pub conditions: Vec<ConditionDef>,

    /// Outcome when this rule is selected
    pub action: ActionDef,
}

/// `[field, operator, threshold]` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDef(pub String, pub String, pub Decimal);

impl ConditionDef {
    pub fn field(&self) -> &str {
        &self.0
    }

    pub fn operator(&self) -> &str {
        &self.1
    }

    pub fn threshold(&self) -> Decimal {
        self.2
    }
}

/// Decision and human-readable reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionDef {
    pub decision: Decision,
    pub reason: String,
}
