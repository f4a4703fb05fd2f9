//! Catalog-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    AlternativeId, CriterionId, DomainError, ErrorCode, ValidationError,
};

/// Errors raised while managing alternatives and criteria.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Alternative not found: {0}")]
    AlternativeNotFound(AlternativeId),

    #[error("Criterion not found: {0}")]
    CriterionNotFound(CriterionId),

    #[error("Alternative {alternative_id} has no score for criterion {criterion_id}")]
    MissingScore {
        alternative_id: AlternativeId,
        criterion_id: CriterionId,
    },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl CatalogError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::AlternativeNotFound(_) => ErrorCode::AlternativeNotFound,
            CatalogError::CriterionNotFound(_) => ErrorCode::CriterionNotFound,
            CatalogError::MissingScore { .. } => ErrorCode::InvalidInput,
            CatalogError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CatalogError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        CatalogError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => CatalogError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => CatalogError::Infrastructure(err.to_string()),
        }
    }
}
