//! DeleteAlternativeHandler - Command handler for removing alternatives.

use std::sync::Arc;

use tracing::info;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::AlternativeId;
use crate::ports::AlternativeRepository;

/// Command to delete an alternative.
#[derive(Debug, Clone)]
pub struct DeleteAlternativeCommand {
    pub alternative_id: AlternativeId,
}

pub struct DeleteAlternativeHandler {
    repository: Arc<dyn AlternativeRepository>,
}

impl DeleteAlternativeHandler {
    pub fn new(repository: Arc<dyn AlternativeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAlternativeCommand) -> Result<(), CatalogError> {
        if self.repository.find_by_id(&cmd.alternative_id).await?.is_none() {
            return Err(CatalogError::AlternativeNotFound(cmd.alternative_id));
        }

        self.repository.delete(&cmd.alternative_id).await?;

        info!(alternative_id = %cmd.alternative_id, "Alternative deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAlternativeRepository;
    use crate::domain::catalog::AlternativeRecord;
    use serde_json::Map;
    use std::collections::HashMap;

    #[tokio::test]
    async fn deletes_existing_alternative() {
        let repo = Arc::new(InMemoryAlternativeRepository::new());
        let record = AlternativeRecord::new("Kos Kenanga", Map::new(), HashMap::new()).unwrap();
        repo.save(&record).await.unwrap();

        DeleteAlternativeHandler::new(repo.clone())
            .handle(DeleteAlternativeCommand {
                alternative_id: *record.id(),
            })
            .await
            .unwrap();

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_alternative_is_not_found() {
        let handler = DeleteAlternativeHandler::new(Arc::new(InMemoryAlternativeRepository::new()));
        let id = AlternativeId::new();

        let result = handler
            .handle(DeleteAlternativeCommand { alternative_id: id })
            .await;
        assert_eq!(result, Err(CatalogError::AlternativeNotFound(id)));
    }
}
