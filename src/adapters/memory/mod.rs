//! In-memory adapters for the catalog and history ports.
//!
//! Shared state sits behind `Arc<tokio::sync::RwLock<_>>`, so clones of an
//! adapter see the same data.

mod alternative_repository;
mod calculation_history;
mod criterion_repository;

pub use alternative_repository::InMemoryAlternativeRepository;
pub use calculation_history::{InMemoryCalculationHistory, DEFAULT_HISTORY_CAPACITY};
pub use criterion_repository::InMemoryCriterionRepository;
