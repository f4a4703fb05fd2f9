//! Input errors raised by the calculator before any computation starts.

use thiserror::Error;

use crate::domain::foundation::{AlternativeId, CriterionId};

/// Hard input failures. Degenerate columns and alternatives are not errors;
/// the calculator absorbs them (see `TopsisCalculator`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("At least one alternative is required")]
    NoAlternatives,

    #[error("At least one criterion is required")]
    NoCriteria,

    #[error("Alternative {alternative_id} has {actual} values but {expected} criteria are defined")]
    DimensionMismatch {
        alternative_id: AlternativeId,
        expected: usize,
        actual: usize,
    },

    #[error("Alternative {alternative_id} has a non-finite value for criterion #{criterion_index}")]
    NonFiniteValue {
        alternative_id: AlternativeId,
        criterion_index: usize,
    },

    #[error("Criterion {criterion_id} has invalid weight {weight}")]
    InvalidWeight { criterion_id: CriterionId, weight: f64 },

    #[error("Criterion weights must sum to a positive value, got {total}")]
    InvalidTotalWeight { total: f64 },
}
