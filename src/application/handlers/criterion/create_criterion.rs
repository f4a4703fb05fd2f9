//! CreateCriterionHandler - Command handler for adding criteria.

use std::sync::Arc;

use tracing::info;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::CriterionId;
use crate::domain::topsis::{Criterion, CriterionType};
use crate::ports::CriterionRepository;

/// Command to create a new criterion.
#[derive(Debug, Clone)]
pub struct CreateCriterionCommand {
    pub name: String,
    pub weight: f64,
    pub criterion_type: CriterionType,
}

/// Handler for creating criteria.
pub struct CreateCriterionHandler {
    repository: Arc<dyn CriterionRepository>,
}

impl CreateCriterionHandler {
    pub fn new(repository: Arc<dyn CriterionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateCriterionCommand) -> Result<Criterion, CatalogError> {
        let criterion = Criterion::try_new(
            CriterionId::new(),
            cmd.name.trim(),
            cmd.weight,
            cmd.criterion_type,
        )?;

        self.repository.save(&criterion).await?;

        info!(
            criterion_id = %criterion.id,
            criterion_type = %criterion.criterion_type,
            weight = criterion.weight,
            "Criterion created"
        );

        Ok(criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCriterionRepository;

    #[tokio::test]
    async fn creates_and_persists_criterion() {
        let repo = Arc::new(InMemoryCriterionRepository::new());
        let handler = CreateCriterionHandler::new(repo.clone());

        let criterion = handler
            .handle(CreateCriterionCommand {
                name: " Price ".to_string(),
                weight: 30.0,
                criterion_type: CriterionType::Cost,
            })
            .await
            .unwrap();

        assert_eq!(criterion.name, "Price");
        assert_eq!(
            repo.find_by_id(&criterion.id).await.unwrap(),
            Some(criterion)
        );
    }

    #[tokio::test]
    async fn rejects_negative_weight() {
        let repo = Arc::new(InMemoryCriterionRepository::new());
        let handler = CreateCriterionHandler::new(repo.clone());

        let result = handler
            .handle(CreateCriterionCommand {
                name: "Price".to_string(),
                weight: -5.0,
                criterion_type: CriterionType::Cost,
            })
            .await;

        assert!(matches!(result, Err(CatalogError::ValidationFailed { .. })));
        assert_eq!(repo.count().await, 0);
    }
}
