//! HTTP routes for criterion endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_criterion, delete_criterion, get_criterion, list_criteria, update_criterion,
    CriterionHandlers,
};

/// Creates the criterion router, nested under `/api/criteria`.
pub fn criterion_routes(handlers: CriterionHandlers) -> Router {
    Router::new()
        .route("/", get(list_criteria).post(create_criterion))
        .route(
            "/:id",
            get(get_criterion)
                .put(update_criterion)
                .delete(delete_criterion),
        )
        .with_state(handlers)
}
