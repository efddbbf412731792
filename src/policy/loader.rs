use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::domain::{Action, Condition, Field, Operator, Rule, RuleBook, RuleDef};
use crate::rules::StaticRuleStore;

/// Scholarship rule book compiled into the binary.
pub const BUILTIN_RULES: &str = include_str!("../../rules/scholarship.yaml");

/// Errors that can occur while loading a rule book.
///
/// All of them are configuration errors: the process should refuse to start
/// rather than run with a rule that can silently never match.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Rule #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("Duplicate rule name: {0}")]
    DuplicateName(String),

    #[error("Rule '{rule}' references unknown field '{field}'")]
    UnknownField { rule: String, field: String },

    #[error("Rule '{rule}' uses unknown operator '{operator}'")]
    UnknownOperator { rule: String, operator: String },
}

/// Parse a rule book from YAML text.
pub fn parse_rule_book(content: &str) -> Result<RuleBook, PolicyError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load a rule book from a YAML file.
pub fn load_rule_book(path: impl AsRef<Path>) -> Result<RuleBook, PolicyError> {
    let content = fs::read_to_string(path)?;
    parse_rule_book(&content)
}

/// The built-in scholarship rule book.
pub fn builtin_rule_book() -> Result<RuleBook, PolicyError> {
    parse_rule_book(BUILTIN_RULES)
}

/// Validate a rule book and resolve it into typed rules, keeping book order.
pub fn compile_rules(book: &RuleBook) -> Result<Vec<Rule>, PolicyError> {
    let mut seen_names = HashSet::new();

    book.rules
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let name = def.name.trim();
            if name.is_empty() {
                return Err(PolicyError::EmptyName { index });
            }
            if !seen_names.insert(name) {
                return Err(PolicyError::DuplicateName(name.to_string()));
            }
            compile_rule(def)
        })
        .collect()
}

fn compile_rule(def: &RuleDef) -> Result<Rule, PolicyError> {
    let name = def.name.trim().to_string();

    let conditions = def
        .conditions
        .iter()
        .map(|cond| -> Result<Condition, PolicyError> {
            let field = Field::parse(cond.field()).ok_or_else(|| PolicyError::UnknownField {
                rule: name.clone(),
                field: cond.field().to_string(),
            })?;
            let operator =
                Operator::parse(cond.operator()).ok_or_else(|| PolicyError::UnknownOperator {
                    rule: name.clone(),
                    operator: cond.operator().to_string(),
                })?;

            let condition = Condition::new(field, operator, cond.threshold());
            if !field.accepts(condition.threshold) {
                warn!(
                    rule = %name,
                    condition = %condition,
                    "Threshold lies outside the field's input range"
                );
            }

            Ok(condition)
        })
        .collect::<Result<_, _>>()?;

    Ok(Rule {
        name,
        priority: def.priority,
        conditions,
        action: Action {
            decision: def.action.decision,
            reason: def.action.reason.clone(),
        },
    })
}

/// Where the rule book comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSource::Builtin => f.write_str("builtin"),
            RuleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads and compiles the rule book once, at startup.
pub struct PolicyLoader {
    source: RuleSource,
}

impl PolicyLoader {
    /// Loader for `path`, or for the built-in rule book when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        let source = match path {
            Some(path) => RuleSource::File(path),
            None => RuleSource::Builtin,
        };
        PolicyLoader { source }
    }

    /// Read, validate and compile the rule book into a store.
    pub fn load(&self) -> Result<StaticRuleStore, PolicyError> {
        let book = match &self.source {
            RuleSource::Builtin => builtin_rule_book()?,
            RuleSource::File(path) => load_rule_book(path)?,
        };

        let rules = compile_rules(&book)?;
        Ok(StaticRuleStore::new(rules))
    }

    pub fn source(&self) -> &RuleSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Decision;
    use crate::rules::RuleStore;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_rule_book() {
        let book = builtin_rule_book().unwrap();
        let rules = compile_rules(&book).unwrap();

        let summary: Vec<(&str, i64, Decision)> = rules
            .iter()
            .map(|r| (r.name.as_str(), r.priority, r.action.decision))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Top merit candidate", 100, Decision::AwardFull),
                ("Good candidate - partial scholarship", 80, Decision::AwardPartial),
                ("Need-based review", 70, Decision::Review),
                ("Low CGPA – not eligible", 95, Decision::Reject),
                ("Serious disciplinary record", 90, Decision::Reject),
            ]
        );
        assert_eq!(rules[0].conditions.len(), 4);
        assert_eq!(
            rules[0].conditions[0],
            Condition::new(Field::Cgpa, Operator::Ge, Decimal::new(37, 1))
        );
        assert_eq!(
            rules[0].action.reason,
            "Excellent academic & co-curricular performance, with acceptable need"
        );
    }

    #[test]
    fn test_load_rule_book_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
rules:
  - name: Honours
    priority: 10
    conditions:
      - [cgpa, ">", 3.9]
    action:
      decision: AWARD_FULL
      reason: Top of the class
"#
        )
        .unwrap();

        let loader = PolicyLoader::new(Some(file.path().to_path_buf()));
        let store = loader.load().unwrap();

        assert_eq!(store.all_rules().len(), 1);
        assert_eq!(store.all_rules()[0].name, "Honours");
        assert_eq!(loader.source(), &RuleSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_builtin_loader() {
        let loader = PolicyLoader::new(None);
        let store = loader.load().unwrap();

        assert_eq!(store.all_rules().len(), 5);
        assert_eq!(loader.source().to_string(), "builtin");
    }

    #[test]
    fn test_empty_rule_book_is_valid() {
        let book = parse_rule_book("rules: []").unwrap();
        assert!(compile_rules(&book).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_field_is_fatal() {
        let book = parse_rule_book(
            r#"
rules:
  - name: Typo
    priority: 1
    conditions:
      - [cgap, ">=", 3.0]
    action:
      decision: REVIEW
      reason: x
"#,
        )
        .unwrap();

        let err = compile_rules(&book).unwrap_err();
        assert!(matches!(err, PolicyError::UnknownField { ref field, .. } if field == "cgap"));
        assert!(err.to_string().contains("Typo"));
    }

    #[test]
    fn test_unknown_operator_is_fatal() {
        let book = parse_rule_book(
            r#"
rules:
  - name: Bad op
    priority: 1
    conditions:
      - [cgpa, "!=", 3.0]
    action:
      decision: REVIEW
      reason: x
"#,
        )
        .unwrap();

        let err = compile_rules(&book).unwrap_err();
        assert!(matches!(err, PolicyError::UnknownOperator { ref operator, .. } if operator == "!="));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let book = parse_rule_book(
            r#"
rules:
  - name: Same
    priority: 1
    action: { decision: REVIEW, reason: a }
  - name: " Same "
    priority: 2
    action: { decision: REJECT, reason: b }
"#,
        )
        .unwrap();

        let err = compile_rules(&book).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let book = parse_rule_book(
            r#"
rules:
  - name: "  "
    priority: 1
    action: { decision: REVIEW, reason: a }
"#,
        )
        .unwrap();

        assert!(matches!(
            compile_rules(&book).unwrap_err(),
            PolicyError::EmptyName { index: 0 }
        ));
    }

    #[test]
    fn test_malformed_condition_rejected() {
        let result = parse_rule_book(
            r#"
rules:
  - name: Short
    priority: 1
    conditions:
      - [cgpa, ">="]
    action: { decision: REVIEW, reason: a }
"#,
        );

        assert!(matches!(result, Err(PolicyError::Yaml(_))));
    }

    #[test]
    fn test_missing_file() {
        let loader = PolicyLoader::new(Some(PathBuf::from("/nonexistent/rules.yaml")));
        assert!(matches!(loader.load(), Err(PolicyError::Io(_))));
    }

    #[test]
    fn test_out_of_range_threshold_is_accepted() {
        let book = parse_rule_book(
            r#"
rules:
  - name: Impossible
    priority: 1
    conditions:
      - [cgpa, ">", 5.0]
    action: { decision: AWARD_FULL, reason: never }
"#,
        )
        .unwrap();

        assert_eq!(compile_rules(&book).unwrap().len(), 1);
    }
}
