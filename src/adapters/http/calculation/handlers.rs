//! HTTP handlers for calculation endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    handle_ranking_error, invalid_body, invalid_id, invalid_query,
};
use crate::application::handlers::ranking::{
    CalculateRankingCommand, CalculateRankingHandler, GetCalculationHandler, GetCalculationQuery,
    ListCalculationsHandler, ListCalculationsQuery,
};
use crate::domain::foundation::CalculationId;

use super::dto::{
    CalculateRequest, CalculationListResponse, CalculationResponse, ListCalculationsParams,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CalculationHandlers {
    calculate_handler: Arc<CalculateRankingHandler>,
    get_handler: Arc<GetCalculationHandler>,
    list_handler: Arc<ListCalculationsHandler>,
}

impl CalculationHandlers {
    pub fn new(
        calculate_handler: Arc<CalculateRankingHandler>,
        get_handler: Arc<GetCalculationHandler>,
        list_handler: Arc<ListCalculationsHandler>,
    ) -> Self {
        Self {
            calculate_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/calculations - Rank the catalog and archive the run
pub async fn calculate(
    State(handlers): State<CalculationHandlers>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let cmd = CalculateRankingCommand {
        weight_overrides: req.weights,
    };

    match handlers.calculate_handler.handle(cmd).await {
        Ok(record) => {
            let response: CalculationResponse = record.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_ranking_error(e),
    }
}

/// GET /api/calculations - Recent calculations, newest first
pub async fn list_calculations(
    State(handlers): State<CalculationHandlers>,
    params: Result<Query<ListCalculationsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return invalid_query(rejection),
    };

    let query = ListCalculationsQuery {
        limit: params.limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(records) => {
            let response: CalculationListResponse = records.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ranking_error(e),
    }
}

/// GET /api/calculations/:id - One archived calculation
pub async fn get_calculation(
    State(handlers): State<CalculationHandlers>,
    Path(calculation_id): Path<String>,
) -> Response {
    let Ok(calculation_id) = calculation_id.parse::<CalculationId>() else {
        return invalid_id("calculation");
    };

    match handlers
        .get_handler
        .handle(GetCalculationQuery { calculation_id })
        .await
    {
        Ok(record) => {
            let response: CalculationResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ranking_error(e),
    }
}
