use serde::{Deserialize, Serialize};
use std::fmt;

/// Scholarship decision attached to a rule's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Full scholarship
    AwardFull,
    /// Partial scholarship
    AwardPartial,
    /// Application goes to a human reviewer
    Review,
    /// Not eligible
    Reject,
}

impl Decision {
    /// Wire representation, e.g. `AWARD_FULL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::AwardFull => "AWARD_FULL",
            Decision::AwardPartial => "AWARD_PARTIAL",
            Decision::Review => "REVIEW",
            Decision::Reject => "REJECT",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
