//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter (dto, handlers, routes);
//! [`api_router`] mounts them under `/api`.

pub mod alternative;
pub mod calculation;
pub mod criterion;
pub mod error;
mod router;

pub use error::ErrorResponse;
pub use router::{api_router, ApiHandlers};
