//! HTTP routes for calculation endpoints.

use axum::{routing::get, Router};

use super::handlers::{calculate, get_calculation, list_calculations, CalculationHandlers};

/// Creates the calculation router, nested under `/api/calculations`.
pub fn calculation_routes(handlers: CalculationHandlers) -> Router {
    Router::new()
        .route("/", get(list_calculations).post(calculate))
        .route("/:id", get(get_calculation))
        .with_state(handlers)
}
