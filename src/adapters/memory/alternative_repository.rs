//! In-memory alternative repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::AlternativeRecord;
use crate::domain::foundation::{AlternativeId, DomainError, ErrorCode};
use crate::ports::AlternativeRepository;

/// In-memory storage for alternative records, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryAlternativeRepository {
    alternatives: Arc<RwLock<Vec<AlternativeRecord>>>,
}

impl InMemoryAlternativeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.alternatives.write().await.clear();
    }

    fn not_found(id: &AlternativeId) -> DomainError {
        DomainError::new(ErrorCode::AlternativeNotFound, "Alternative not found")
            .with_detail("alternative_id", id.to_string())
    }
}

#[async_trait]
impl AlternativeRepository for InMemoryAlternativeRepository {
    async fn save(&self, alternative: &AlternativeRecord) -> Result<(), DomainError> {
        let mut alternatives = self.alternatives.write().await;
        if alternatives.iter().any(|a| a.id() == alternative.id()) {
            return Err(DomainError::storage("Alternative already exists")
                .with_detail("alternative_id", alternative.id().to_string()));
        }
        alternatives.push(alternative.clone());
        Ok(())
    }

    async fn update(&self, alternative: &AlternativeRecord) -> Result<(), DomainError> {
        let mut alternatives = self.alternatives.write().await;
        let slot = alternatives
            .iter_mut()
            .find(|a| a.id() == alternative.id())
            .ok_or_else(|| Self::not_found(alternative.id()))?;
        *slot = alternative.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &AlternativeId,
    ) -> Result<Option<AlternativeRecord>, DomainError> {
        let alternatives = self.alternatives.read().await;
        Ok(alternatives.iter().find(|a| a.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<AlternativeRecord>, DomainError> {
        Ok(self.alternatives.read().await.clone())
    }

    async fn delete(&self, id: &AlternativeId) -> Result<(), DomainError> {
        let mut alternatives = self.alternatives.write().await;
        let position = alternatives
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        alternatives.remove(position);
        Ok(())
    }
}
