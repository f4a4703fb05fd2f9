//! Criterion - a weighted dimension of evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CriterionId, ValidationError};

/// Polarity of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher raw values are more desirable.
    Benefit,
    /// Lower raw values are more desirable.
    Cost,
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionType::Benefit => write!(f, "benefit"),
            CriterionType::Cost => write!(f, "cost"),
        }
    }
}

impl FromStr for CriterionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionType::Benefit),
            "cost" => Ok(CriterionType::Cost),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }
}

/// A criterion with its raw (not necessarily unit-sum) weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    pub weight: f64,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
}

impl Criterion {
    /// Creates a criterion, rejecting blank names and weights that are
    /// negative or not finite.
    pub fn try_new(
        id: CriterionId,
        name: impl Into<String>,
        weight: f64,
        criterion_type: CriterionType,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Self::check_weight(weight)?;

        Ok(Self {
            id,
            name,
            weight,
            criterion_type,
        })
    }

    /// Shorthand for a benefit criterion with a fresh id.
    pub fn benefit(name: impl Into<String>, weight: f64) -> Result<Self, ValidationError> {
        Self::try_new(CriterionId::new(), name, weight, CriterionType::Benefit)
    }

    /// Shorthand for a cost criterion with a fresh id.
    pub fn cost(name: impl Into<String>, weight: f64) -> Result<Self, ValidationError> {
        Self::try_new(CriterionId::new(), name, weight, CriterionType::Cost)
    }

    /// Validates a weight value.
    pub fn check_weight(weight: f64) -> Result<(), ValidationError> {
        if !weight.is_finite() {
            return Err(ValidationError::not_finite("weight"));
        }
        if weight < 0.0 {
            return Err(ValidationError::negative("weight", weight));
        }
        Ok(())
    }

    /// Returns a copy of this criterion carrying a different weight.
    pub fn with_weight(&self, weight: f64) -> Result<Self, ValidationError> {
        Self::check_weight(weight)?;
        Ok(Self {
            weight,
            ..self.clone()
        })
    }
}
