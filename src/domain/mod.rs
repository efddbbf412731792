pub mod decision;
pub mod facts;
pub mod outcome;
pub mod policy;
pub mod rule;

pub use decision::Decision;
pub use facts::{Facts, FactsError, Field};
pub use outcome::{EvaluationResult, NO_MATCH_MESSAGE};
pub use policy::{ActionDef, ConditionDef, RuleBook, RuleDef};
pub use rule::{Action, Condition, Operator, Rule};
