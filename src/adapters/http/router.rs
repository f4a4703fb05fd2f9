//! Top-level router: feature routers, health check and middleware.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use super::alternative::{alternative_routes, AlternativeHandlers};
use super::calculation::{calculation_routes, CalculationHandlers};
use super::criterion::{criterion_routes, CriterionHandlers};
use crate::adapters::memory::{
    InMemoryAlternativeRepository, InMemoryCalculationHistory, InMemoryCriterionRepository,
};
use crate::application::handlers::{
    CalculateRankingHandler, CreateAlternativeHandler, CreateCriterionHandler,
    DeleteAlternativeHandler, DeleteCriterionHandler, GetAlternativeHandler,
    GetCalculationHandler, GetCriterionHandler, ListAlternativesHandler, ListCalculationsHandler,
    ListCriteriaHandler, UpdateAlternativeHandler, UpdateCriterionHandler,
};
use crate::config::{CorsPolicy, RankingConfig, ServerConfig};
use crate::ports::{AlternativeRepository, CalculationHistory, CriterionRepository};

/// Handler state for every feature router.
#[derive(Clone)]
pub struct ApiHandlers {
    pub criteria: CriterionHandlers,
    pub alternatives: AlternativeHandlers,
    pub calculations: CalculationHandlers,
}

impl ApiHandlers {
    /// Wires all application handlers against the given ports.
    pub fn new(
        criteria: Arc<dyn CriterionRepository>,
        alternatives: Arc<dyn AlternativeRepository>,
        history: Arc<dyn CalculationHistory>,
        ranking: &RankingConfig,
    ) -> Self {
        let criterion_handlers = CriterionHandlers::new(
            Arc::new(CreateCriterionHandler::new(criteria.clone())),
            Arc::new(UpdateCriterionHandler::new(criteria.clone())),
            Arc::new(DeleteCriterionHandler::new(
                criteria.clone(),
                alternatives.clone(),
            )),
            Arc::new(GetCriterionHandler::new(criteria.clone())),
            Arc::new(ListCriteriaHandler::new(criteria.clone())),
        );

        let alternative_handlers = AlternativeHandlers::new(
            Arc::new(CreateAlternativeHandler::new(
                alternatives.clone(),
                criteria.clone(),
            )),
            Arc::new(UpdateAlternativeHandler::new(
                alternatives.clone(),
                criteria.clone(),
            )),
            Arc::new(DeleteAlternativeHandler::new(alternatives.clone())),
            Arc::new(GetAlternativeHandler::new(alternatives.clone())),
            Arc::new(ListAlternativesHandler::new(alternatives.clone())),
        );

        let calculation_handlers = CalculationHandlers::new(
            Arc::new(CalculateRankingHandler::new(
                criteria,
                alternatives,
                history.clone(),
            )),
            Arc::new(GetCalculationHandler::new(history.clone())),
            Arc::new(ListCalculationsHandler::new(
                history,
                ranking.history_limit,
                ranking.history_capacity,
            )),
        );

        Self {
            criteria: criterion_handlers,
            alternatives: alternative_handlers,
            calculations: calculation_handlers,
        }
    }

    /// Handlers backed by fresh in-memory adapters.
    pub fn in_memory(ranking: &RankingConfig) -> Self {
        Self::new(
            Arc::new(InMemoryCriterionRepository::new()),
            Arc::new(InMemoryAlternativeRepository::new()),
            Arc::new(InMemoryCalculationHistory::with_capacity(
                ranking.history_capacity,
            )),
            ranking,
        )
    }
}

/// Builds the full application router.
///
/// ```text
/// GET        /health
/// GET|POST   /api/criteria            GET|PUT|DELETE /api/criteria/:id
/// GET|POST   /api/alternatives        GET|PUT|DELETE /api/alternatives/:id
/// GET|POST   /api/calculations        GET            /api/calculations/:id
/// ```
pub fn api_router(handlers: ApiHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/criteria", criterion_routes(handlers.criteria))
        .nest("/api/alternatives", alternative_routes(handlers.alternatives))
        .nest("/api/calculations", calculation_routes(handlers.calculations))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness check
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = match server.cors_policy() {
        CorsPolicy::AnyOrigin => return CorsLayer::permissive(),
        CorsPolicy::Origins(origins) => origins,
    };

    let origins: Vec<HeaderValue> = origins
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
