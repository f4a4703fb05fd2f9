//! Criterion repository port.
//!
//! Defines the contract for storing the criteria a ranking is computed
//! against. Listing order is the order the calculator sees columns in.

use async_trait::async_trait;

use crate::domain::foundation::{CriterionId, DomainError};
use crate::domain::topsis::Criterion;

/// Repository port for criteria.
#[async_trait]
pub trait CriterionRepository: Send + Sync {
    /// Save a new criterion.
    async fn save(&self, criterion: &Criterion) -> Result<(), DomainError>;

    /// Replace an existing criterion.
    ///
    /// # Errors
    ///
    /// - `CriterionNotFound` if the criterion doesn't exist
    async fn update(&self, criterion: &Criterion) -> Result<(), DomainError>;

    /// Find a criterion by its ID.
    async fn find_by_id(&self, id: &CriterionId) -> Result<Option<Criterion>, DomainError>;

    /// All criteria in insertion order.
    async fn list(&self) -> Result<Vec<Criterion>, DomainError>;

    /// Delete a criterion.
    ///
    /// # Errors
    ///
    /// - `CriterionNotFound` if the criterion doesn't exist
    async fn delete(&self, id: &CriterionId) -> Result<(), DomainError>;
}
