use rust_decimal::Decimal;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use super::{Decision, Facts, Field};

/// Comparison applied between a fact and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "==")]
    Eq,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Ge,
        Operator::Le,
        Operator::Gt,
        Operator::Lt,
        Operator::Eq,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Eq => "==",
        }
    }

    pub fn parse(symbol: &str) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the comparison as `value <op> threshold`.
    #[inline]
    pub fn apply(&self, value: Decimal, threshold: Decimal) -> bool {
        match self {
            Operator::Ge => value >= threshold,
            Operator::Le => value <= threshold,
            Operator::Gt => value > threshold,
            Operator::Lt => value < threshold,
            Operator::Eq => value == threshold,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single `field <op> threshold` test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub field: Field,
    pub operator: Operator,
    pub threshold: Decimal,
}

impl Condition {
    pub fn new(field: Field, operator: Operator, threshold: Decimal) -> Self {
        Condition {
            field,
            operator,
            threshold,
        }
    }

    #[inline]
    pub fn holds(&self, facts: &Facts) -> bool {
        self.operator.apply(facts.value(self.field), self.threshold)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.threshold)
    }
}

/// Outcome a rule produces when it wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub decision: Decision,
    pub reason: String,
}

/// A named, prioritized conjunction of conditions.
///
/// Rules are compiled from a rule book at startup and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: String,
    pub priority: i64,
    pub conditions: SmallVec<[Condition; 4]>,
    pub action: Action,
}

impl Rule {
    /// Returns true if every condition holds. A rule without conditions always matches.
    #[inline]
    pub fn matches(&self, facts: &Facts) -> bool {
        self.conditions.iter().all(|c| c.holds(facts))
    }
}
