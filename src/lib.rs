pub mod api;
pub mod config;
pub mod domain;
pub mod observability;
pub mod policy;
pub mod rules;

pub use config::Config;
pub use domain::{Decision, EvaluationResult, Facts, Rule};
pub use rules::{evaluate, Evaluator, RuleStore, StaticRuleStore};
