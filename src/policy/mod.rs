pub mod loader;

pub use loader::{
    builtin_rule_book, compile_rules, load_rule_book, parse_rule_book, PolicyError, PolicyLoader,
    RuleSource, BUILTIN_RULES,
};
