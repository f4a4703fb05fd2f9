//! HTTP adapter for criterion endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateCriterionRequest, CriterionListResponse, CriterionResponse, UpdateCriterionRequest,
};
pub use handlers::CriterionHandlers;
pub use routes::criterion_routes;
