//! Shared error body and error-to-status mapping for all endpoints.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::application::handlers::RankingError;
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::ErrorCode;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// 400 for a path segment that is not a valid id.
pub fn invalid_id(resource: &str) -> Response {
    ErrorResponse::bad_request(format!("Invalid {} ID", resource))
        .into_response_with(StatusCode::BAD_REQUEST)
}

/// 400 for a body that is not the expected JSON.
pub fn invalid_body(rejection: JsonRejection) -> Response {
    ErrorResponse::bad_request(rejection.body_text()).into_response_with(StatusCode::BAD_REQUEST)
}

pub fn invalid_query(rejection: QueryRejection) -> Response {
    ErrorResponse::bad_request(rejection.body_text()).into_response_with(StatusCode::BAD_REQUEST)
}

pub fn handle_catalog_error(err: CatalogError) -> Response {
    let body = ErrorResponse::new(err.code(), err.to_string());
    match err {
        CatalogError::AlternativeNotFound(_) | CatalogError::CriterionNotFound(_) => {
            body.into_response_with(StatusCode::NOT_FOUND)
        }
        CatalogError::ValidationFailed { field, .. } => body
            .with_details(json!({ "field": field }))
            .into_response_with(StatusCode::BAD_REQUEST),
        CatalogError::MissingScore {
            alternative_id,
            criterion_id,
        } => body
            .with_details(json!({
                "alternative_id": alternative_id.to_string(),
                "criterion_id": criterion_id.to_string(),
            }))
            .into_response_with(StatusCode::UNPROCESSABLE_ENTITY),
        CatalogError::Infrastructure(msg) => {
            error!(error = %msg, "Catalog storage failure");
            ErrorResponse::internal(msg).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub fn handle_ranking_error(err: RankingError) -> Response {
    match err {
        RankingError::Catalog(e) => handle_catalog_error(e),
        RankingError::InvalidInput(e) => ErrorResponse::new(ErrorCode::InvalidInput, e.to_string())
            .into_response_with(StatusCode::BAD_REQUEST),
        RankingError::CalculationNotFound(id) => {
            ErrorResponse::new(ErrorCode::CalculationNotFound, format!("Calculation not found: {}", id))
                .into_response_with(StatusCode::NOT_FOUND)
        }
        RankingError::Infrastructure(msg) => {
            error!(error = %msg, "Ranking storage failure");
            ErrorResponse::internal(msg).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AlternativeId, CalculationId, CriterionId};
    use crate::domain::topsis::InvalidInputError;

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn error_response_uses_domain_code() {
        let error = ErrorResponse::new(ErrorCode::CriterionNotFound, "gone");
        assert_eq!(error.code, "CRITERION_NOT_FOUND");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_catalog_error(CatalogError::AlternativeNotFound(AlternativeId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = handle_ranking_error(RankingError::CalculationNotFound(CalculationId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_failed_maps_to_400() {
        let response = handle_catalog_error(CatalogError::validation("weight", "negative"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_score_maps_to_422() {
        let response = handle_catalog_error(CatalogError::MissingScore {
            alternative_id: AlternativeId::new(),
            criterion_id: CriterionId::new(),
        });
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_input_maps_to_400() {
        let response =
            handle_ranking_error(RankingError::InvalidInput(InvalidInputError::NoAlternatives));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_ranking_error(RankingError::Infrastructure("down".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
