//! HTTP adapter for calculation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CalculateRequest, CalculationListResponse, CalculationResponse, ListCalculationsParams,
    RankedAlternativeResponse,
};
pub use handlers::CalculationHandlers;
pub use routes::calculation_routes;
