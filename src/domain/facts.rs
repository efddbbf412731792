use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Applicant attribute a rule condition can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Cgpa,
    FamilyIncome,
    CoCurricularScore,
    DisciplinaryActions,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Cgpa,
        Field::FamilyIncome,
        Field::CoCurricularScore,
        Field::DisciplinaryActions,
    ];

    /// Key used in rule books and request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Cgpa => "cgpa",
            Field::FamilyIncome => "family_income",
            Field::CoCurricularScore => "co_curricular_score",
            Field::DisciplinaryActions => "disciplinary_actions",
        }
    }

    /// Resolve a rule book key. Exact match only, so typos surface at load time.
    pub fn parse(key: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.as_str() == key)
    }

    /// Inclusive lower bound accepted at the input boundary.
    pub fn min(&self) -> Decimal {
        Decimal::ZERO
    }

    /// Inclusive upper bound accepted at the input boundary, if any.
    pub fn max(&self) -> Option<Decimal> {
        match self {
            Field::Cgpa => Some(Decimal::new(400, 2)),
            Field::CoCurricularScore => Some(Decimal::new(100, 0)),
            Field::DisciplinaryActions => Some(Decimal::from(u32::MAX)),
            Field::FamilyIncome => None,
        }
    }

    /// Returns true if `value` is inside the field's input range.
    pub fn accepts(&self, value: Decimal) -> bool {
        value >= self.min() && self.max().map_or(true, |max| value <= max)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced when applicant input cannot become [`Facts`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactsError {
    #[error("{field} is required")]
    Missing { field: Field },

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: Field, value: String },

    #[error("{field} must be a whole number, got {value}")]
    NotAnInteger { field: Field, value: Decimal },

    #[error("{field} is out of range: {value} (allowed {range})")]
    OutOfRange {
        field: Field,
        value: Decimal,
        range: String,
    },
}

impl FactsError {
    fn out_of_range(field: Field, value: Decimal) -> Self {
        let range = match field.max() {
            Some(max) => format!("{}..={}", field.min(), max),
            None => format!(">= {}", field.min()),
        };
        FactsError::OutOfRange {
            field,
            value,
            range,
        }
    }
}

/// One applicant's profile, built per request and discarded after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facts {
    pub cgpa: Decimal,
    pub family_income: Decimal,
    pub co_curricular_score: u32,
    pub disciplinary_actions: u32,
}

impl Facts {
    /// Build validated facts from raw decimal inputs.
    ///
    /// Integer fields must carry no fractional part; every field must sit
    /// inside its input range.
    pub fn new(
        cgpa: Decimal,
        family_income: Decimal,
        co_curricular_score: Decimal,
        disciplinary_actions: Decimal,
    ) -> Result<Self, FactsError> {
        check_range(Field::Cgpa, cgpa)?;
        check_range(Field::FamilyIncome, family_income)?;

        Ok(Facts {
            cgpa,
            family_income,
            co_curricular_score: whole(Field::CoCurricularScore, co_curricular_score)?,
            disciplinary_actions: whole(Field::DisciplinaryActions, disciplinary_actions)?,
        })
    }

    /// Value of `field` as a decimal, for condition checks.
    #[inline]
    pub fn value(&self, field: Field) -> Decimal {
        match field {
            Field::Cgpa => self.cgpa,
            Field::FamilyIncome => self.family_income,
            Field::CoCurricularScore => Decimal::from(self.co_curricular_score),
            Field::DisciplinaryActions => Decimal::from(self.disciplinary_actions),
        }
    }
}

fn check_range(field: Field, value: Decimal) -> Result<(), FactsError> {
    if field.accepts(value) {
        Ok(())
    } else {
        Err(FactsError::out_of_range(field, value))
    }
}

fn whole(field: Field, value: Decimal) -> Result<u32, FactsError> {
    if !value.fract().is_zero() {
        return Err(FactsError::NotAnInteger { field, value });
    }
    check_range(field, value)?;
    value
        .to_u32()
        .ok_or_else(|| FactsError::out_of_range(field, value))
}
