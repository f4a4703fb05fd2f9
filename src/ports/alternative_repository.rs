//! Alternative repository port.
//!
//! Listing order doubles as the tie-break order of a ranking, so
//! implementations must return alternatives in insertion order.

use async_trait::async_trait;

use crate::domain::catalog::AlternativeRecord;
use crate::domain::foundation::{AlternativeId, DomainError};

/// Repository port for alternative records.
#[async_trait]
pub trait AlternativeRepository: Send + Sync {
    /// Save a new alternative.
    async fn save(&self, alternative: &AlternativeRecord) -> Result<(), DomainError>;

    /// Replace an existing alternative.
    ///
    /// # Errors
    ///
    /// - `AlternativeNotFound` if the alternative doesn't exist
    async fn update(&self, alternative: &AlternativeRecord) -> Result<(), DomainError>;

    /// Find an alternative by its ID.
    async fn find_by_id(&self, id: &AlternativeId)
        -> Result<Option<AlternativeRecord>, DomainError>;

    /// All alternatives in insertion order.
    async fn list(&self) -> Result<Vec<AlternativeRecord>, DomainError>;

    /// Delete an alternative.
    ///
    /// # Errors
    ///
    /// - `AlternativeNotFound` if the alternative doesn't exist
    async fn delete(&self, id: &AlternativeId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AlternativeRepository) {}
    }
}
