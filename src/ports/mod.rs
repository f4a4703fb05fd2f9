//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CriterionRepository` - Storage for criteria
//! - `AlternativeRepository` - Storage for alternative records
//! - `CalculationHistory` - Archive of computed rankings

mod alternative_repository;
mod calculation_history;
mod criterion_repository;

pub use alternative_repository::AlternativeRepository;
pub use calculation_history::CalculationHistory;
pub use criterion_repository::CriterionRepository;
