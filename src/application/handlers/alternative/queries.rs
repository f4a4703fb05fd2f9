//! Alternative query handlers.

use std::sync::Arc;

use crate::domain::catalog::{AlternativeRecord, CatalogError};
use crate::domain::foundation::AlternativeId;
use crate::ports::AlternativeRepository;

/// Query for a single alternative.
#[derive(Debug, Clone)]
pub struct GetAlternativeQuery {
    pub alternative_id: AlternativeId,
}

pub struct GetAlternativeHandler {
    repository: Arc<dyn AlternativeRepository>,
}

impl GetAlternativeHandler {
    pub fn new(repository: Arc<dyn AlternativeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAlternativeQuery,
    ) -> Result<AlternativeRecord, CatalogError> {
        self.repository
            .find_by_id(&query.alternative_id)
            .await?
            .ok_or(CatalogError::AlternativeNotFound(query.alternative_id))
    }
}

/// Lists alternatives in insertion order.
pub struct ListAlternativesHandler {
    repository: Arc<dyn AlternativeRepository>,
}

impl ListAlternativesHandler {
    pub fn new(repository: Arc<dyn AlternativeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<AlternativeRecord>, CatalogError> {
        Ok(self.repository.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAlternativeRepository;
    use serde_json::Map;
    use std::collections::HashMap;

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let repo = Arc::new(InMemoryAlternativeRepository::new());
        let first = AlternativeRecord::new("Kos A", Map::new(), HashMap::new()).unwrap();
        let second = AlternativeRecord::new("Kos B", Map::new(), HashMap::new()).unwrap();
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let listed = ListAlternativesHandler::new(repo.clone()).handle().await.unwrap();
        assert_eq!(listed, vec![first.clone(), second]);

        let found = GetAlternativeHandler::new(repo)
            .handle(GetAlternativeQuery {
                alternative_id: *first.id(),
            })
            .await
            .unwrap();
        assert_eq!(found, first);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let handler = GetAlternativeHandler::new(Arc::new(InMemoryAlternativeRepository::new()));
        let id = AlternativeId::new();
        let result = handler.handle(GetAlternativeQuery { alternative_id: id }).await;
        assert_eq!(result, Err(CatalogError::AlternativeNotFound(id)));
    }
}
