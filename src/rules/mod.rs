pub mod evaluator;
pub mod store;
pub mod traits;

pub use evaluator::{evaluate, Evaluator};
pub use store::StaticRuleStore;
pub use traits::RuleStore;
