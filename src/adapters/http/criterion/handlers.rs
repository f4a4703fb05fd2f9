//! HTTP handlers for criterion endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_catalog_error, invalid_body, invalid_id};
use crate::application::handlers::criterion::{
    CreateCriterionCommand, CreateCriterionHandler, DeleteCriterionCommand,
    DeleteCriterionHandler, GetCriterionHandler, GetCriterionQuery, ListCriteriaHandler,
    UpdateCriterionCommand, UpdateCriterionHandler,
};
use crate::domain::foundation::CriterionId;

use super::dto::{
    CreateCriterionRequest, CriterionListResponse, CriterionResponse, UpdateCriterionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CriterionHandlers {
    create_handler: Arc<CreateCriterionHandler>,
    update_handler: Arc<UpdateCriterionHandler>,
    delete_handler: Arc<DeleteCriterionHandler>,
    get_handler: Arc<GetCriterionHandler>,
    list_handler: Arc<ListCriteriaHandler>,
}

impl CriterionHandlers {
    pub fn new(
        create_handler: Arc<CreateCriterionHandler>,
        update_handler: Arc<UpdateCriterionHandler>,
        delete_handler: Arc<DeleteCriterionHandler>,
        get_handler: Arc<GetCriterionHandler>,
        list_handler: Arc<ListCriteriaHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/criteria - Create a criterion
pub async fn create_criterion(
    State(handlers): State<CriterionHandlers>,
    payload: Result<Json<CreateCriterionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let cmd = CreateCriterionCommand {
        name: req.name,
        weight: req.weight,
        criterion_type: req.criterion_type,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(criterion) => {
            let response: CriterionResponse = criterion.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/criteria - List criteria in column order
pub async fn list_criteria(State(handlers): State<CriterionHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(criteria) => {
            let response: CriterionListResponse = criteria.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/criteria/:id - Get one criterion
pub async fn get_criterion(
    State(handlers): State<CriterionHandlers>,
    Path(criterion_id): Path<String>,
) -> Response {
    let Ok(criterion_id) = criterion_id.parse::<CriterionId>() else {
        return invalid_id("criterion");
    };

    match handlers
        .get_handler
        .handle(GetCriterionQuery { criterion_id })
        .await
    {
        Ok(criterion) => {
            let response: CriterionResponse = criterion.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// PUT /api/criteria/:id - Update name, weight or type
pub async fn update_criterion(
    State(handlers): State<CriterionHandlers>,
    Path(criterion_id): Path<String>,
    payload: Result<Json<UpdateCriterionRequest>, JsonRejection>,
) -> Response {
    let Ok(criterion_id) = criterion_id.parse::<CriterionId>() else {
        return invalid_id("criterion");
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let cmd = UpdateCriterionCommand {
        criterion_id,
        name: req.name,
        weight: req.weight,
        criterion_type: req.criterion_type,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(criterion) => {
            let response: CriterionResponse = criterion.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// DELETE /api/criteria/:id - Delete a criterion and its scores
pub async fn delete_criterion(
    State(handlers): State<CriterionHandlers>,
    Path(criterion_id): Path<String>,
) -> Response {
    let Ok(criterion_id) = criterion_id.parse::<CriterionId>() else {
        return invalid_id("criterion");
    };

    match handlers
        .delete_handler
        .handle(DeleteCriterionCommand { criterion_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_catalog_error(e),
    }
}
