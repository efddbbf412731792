use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Facts, FactsError, Field};

/// JSON body for an evaluation.
///
/// Integer fields are taken as decimals so that `1.5` or `-1` produce a
/// validation message instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub cgpa: Decimal,
    pub family_income: Decimal,
    pub co_curricular_score: Decimal,
    pub disciplinary_actions: Decimal,
}

impl EvaluationRequest {
    /// Validate and convert to facts for rule evaluation.
    pub fn to_facts(&self) -> Result<Facts, FactsError> {
        Facts::new(
            self.cgpa,
            self.family_income,
            self.co_curricular_score,
            self.disciplinary_actions,
        )
    }
}

/// Raw values posted by the HTML form.
///
/// Kept as text so the page can be re-rendered with exactly what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub cgpa: String,
    #[serde(default)]
    pub family_income: String,
    #[serde(default)]
    pub co_curricular_score: String,
    #[serde(default)]
    pub disciplinary_actions: String,
}

impl FormSubmission {
    /// Values shown on a fresh form.
    pub fn initial() -> Self {
        FormSubmission {
            cgpa: "0.00".to_string(),
            family_income: "0".to_string(),
            co_curricular_score: "0".to_string(),
            disciplinary_actions: "0".to_string(),
        }
    }

    /// Value typed into the input for `field`.
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Cgpa => &self.cgpa,
            Field::FamilyIncome => &self.family_income,
            Field::CoCurricularScore => &self.co_curricular_score,
            Field::DisciplinaryActions => &self.disciplinary_actions,
        }
    }

    /// Parse and validate the submitted values.
    pub fn to_facts(&self) -> Result<Facts, FactsError> {
        Facts::new(
            self.number(Field::Cgpa)?,
            self.number(Field::FamilyIncome)?,
            self.number(Field::CoCurricularScore)?,
            self.number(Field::DisciplinaryActions)?,
        )
    }

    fn number(&self, field: Field) -> Result<Decimal, FactsError> {
        let raw = self.raw(field).trim();
        if raw.is_empty() {
            return Err(FactsError::Missing { field });
        }
        raw.parse().map_err(|_| FactsError::NotANumber {
            field,
            value: raw.to_string(),
        })
    }
}
