//! HTTP handlers for alternative endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_catalog_error, invalid_body, invalid_id};
use crate::application::handlers::alternative::{
    CreateAlternativeCommand, CreateAlternativeHandler, DeleteAlternativeCommand,
    DeleteAlternativeHandler, GetAlternativeHandler, GetAlternativeQuery, ListAlternativesHandler,
    UpdateAlternativeCommand, UpdateAlternativeHandler,
};
use crate::domain::foundation::AlternativeId;

use super::dto::{
    AlternativeListResponse, AlternativeResponse, CreateAlternativeRequest,
    UpdateAlternativeRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AlternativeHandlers {
    create_handler: Arc<CreateAlternativeHandler>,
    update_handler: Arc<UpdateAlternativeHandler>,
    delete_handler: Arc<DeleteAlternativeHandler>,
    get_handler: Arc<GetAlternativeHandler>,
    list_handler: Arc<ListAlternativesHandler>,
}

impl AlternativeHandlers {
    pub fn new(
        create_handler: Arc<CreateAlternativeHandler>,
        update_handler: Arc<UpdateAlternativeHandler>,
        delete_handler: Arc<DeleteAlternativeHandler>,
        get_handler: Arc<GetAlternativeHandler>,
        list_handler: Arc<ListAlternativesHandler>,
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

/// POST /api/alternatives - Create an alternative
pub async fn create_alternative(
    State(handlers): State<AlternativeHandlers>,
    payload: Result<Json<CreateAlternativeRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let cmd = CreateAlternativeCommand {
        name: req.name,
        metadata: req.metadata,
        scores: req.scores,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(record) => {
            let response: AlternativeResponse = record.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/alternatives - List alternatives in insertion order
pub async fn list_alternatives(State(handlers): State<AlternativeHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(records) => {
            let response: AlternativeListResponse = records.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/alternatives/:id - Get one alternative
pub async fn get_alternative(
    State(handlers): State<AlternativeHandlers>,
    Path(alternative_id): Path<String>,
) -> Response {
    let Ok(alternative_id) = alternative_id.parse::<AlternativeId>() else {
        return invalid_id("alternative");
    };

    match handlers
        .get_handler
        .handle(GetAlternativeQuery { alternative_id })
        .await
    {
        Ok(record) => {
            let response: AlternativeResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// PUT /api/alternatives/:id - Rename, replace metadata or merge scores
pub async fn update_alternative(
    State(handlers): State<AlternativeHandlers>,
    Path(alternative_id): Path<String>,
    payload: Result<Json<UpdateAlternativeRequest>, JsonRejection>,
) -> Response {
    let Ok(alternative_id) = alternative_id.parse::<AlternativeId>() else {
        return invalid_id("alternative");
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let cmd = UpdateAlternativeCommand {
        alternative_id,
        name: req.name,
        metadata: req.metadata,
        scores: req.scores,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(record) => {
            let response: AlternativeResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// DELETE /api/alternatives/:id - Delete an alternative
pub async fn delete_alternative(
    State(handlers): State<AlternativeHandlers>,
    Path(alternative_id): Path<String>,
) -> Response {
    let Ok(alternative_id) = alternative_id.parse::<AlternativeId>() else {
        return invalid_id("alternative");
    };

    match handlers
        .delete_handler
        .handle(DeleteAlternativeCommand { alternative_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_catalog_error(e),
    }
}
