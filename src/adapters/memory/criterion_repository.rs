//! In-memory criterion repository.
//!
//! Criteria live in a `Vec` so listing order is insertion order.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CriterionId, DomainError, ErrorCode};
use crate::domain::topsis::Criterion;
use crate::ports::CriterionRepository;

/// In-memory storage for criteria
#[derive(Debug, Clone, Default)]
pub struct InMemoryCriterionRepository {
    criteria: Arc<RwLock<Vec<Criterion>>>,
}

impl InMemoryCriterionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored criteria
    pub async fn count(&self) -> usize {
        self.criteria.read().await.len()
    }

    fn not_found(id: &CriterionId) -> DomainError {
        DomainError::new(ErrorCode::CriterionNotFound, "Criterion not found")
            .with_detail("criterion_id", id.to_string())
    }
}

#[async_trait]
impl CriterionRepository for InMemoryCriterionRepository {
    async fn save(&self, criterion: &Criterion) -> Result<(), DomainError> {
        let mut criteria = self.criteria.write().await;
        if criteria.iter().any(|c| c.id == criterion.id) {
            return Err(DomainError::storage("Criterion already exists")
                .with_detail("criterion_id", criterion.id.to_string()));
        }
        criteria.push(criterion.clone());
        Ok(())
    }

    async fn update(&self, criterion: &Criterion) -> Result<(), DomainError> {
        let mut criteria = self.criteria.write().await;
        let slot = criteria
            .iter_mut()
            .find(|c| c.id == criterion.id)
            .ok_or_else(|| Self::not_found(&criterion.id))?;
        *slot = criterion.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &CriterionId) -> Result<Option<Criterion>, DomainError> {
        let criteria = self.criteria.read().await;
        Ok(criteria.iter().find(|c| &c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Criterion>, DomainError> {
        Ok(self.criteria.read().await.clone())
    }

    async fn delete(&self, id: &CriterionId) -> Result<(), DomainError> {
        let mut criteria = self.criteria.write().await;
        let position = criteria
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        criteria.remove(position);
        Ok(())
    }
}
