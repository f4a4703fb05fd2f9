//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory repositories and calculation history
//! - `http` - REST API (axum)

pub mod http;
pub mod memory;

pub use http::{api_router, ApiHandlers};
pub use memory::{
    InMemoryAlternativeRepository, InMemoryCalculationHistory, InMemoryCriterionRepository,
};
