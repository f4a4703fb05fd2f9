//! CreateAlternativeHandler - Command handler for adding alternatives.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use super::ensure_known_criteria;
use crate::domain::catalog::{AlternativeRecord, CatalogError};
use crate::domain::foundation::CriterionId;
use crate::ports::{AlternativeRepository, CriterionRepository};

/// Command to create a new alternative.
#[derive(Debug, Clone, Default)]
pub struct CreateAlternativeCommand {
    pub name: String,
    pub metadata: Map<String, Value>,
    pub scores: HashMap<CriterionId, f64>,
}

/// Handler for creating alternatives.
///
/// Scores may be partial; an alternative without a score for every
/// criterion is stored but blocks ranking until it is completed.
pub struct CreateAlternativeHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    criteria: Arc<dyn CriterionRepository>,
}

impl CreateAlternativeHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        criteria: Arc<dyn CriterionRepository>,
    ) -> Self {
        Self {
            alternatives,
            criteria,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateAlternativeCommand,
    ) -> Result<AlternativeRecord, CatalogError> {
        ensure_known_criteria(self.criteria.as_ref(), cmd.scores.keys()).await?;

        let record = AlternativeRecord::new(cmd.name, cmd.metadata, cmd.scores)?;
        self.alternatives.save(&record).await?;

        info!(
            alternative_id = %record.id(),
            scores = record.scores().len(),
            "Alternative created"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAlternativeRepository, InMemoryCriterionRepository};
    use crate::domain::topsis::Criterion;
    use serde_json::json;

    #[tokio::test]
    async fn creates_alternative_with_scores_and_metadata() {
        let alternatives = Arc::new(InMemoryAlternativeRepository::new());
        let criteria = Arc::new(InMemoryCriterionRepository::new());
        let price = Criterion::cost("Price", 30.0).unwrap();
        criteria.save(&price).await.unwrap();

        let mut metadata = Map::new();
        metadata.insert("address".to_string(), json!("Jl. Raya Kampus No. 12"));

        let handler = CreateAlternativeHandler::new(alternatives.clone(), criteria);
        let record = handler
            .handle(CreateAlternativeCommand {
                name: "Kos Melati".to_string(),
                metadata,
                scores: HashMap::from([(price.id, 1_200_000.0)]),
            })
            .await
            .unwrap();

        assert_eq!(record.score_for(&price.id), Some(1_200_000.0));
        assert_eq!(record.metadata()["address"], json!("Jl. Raya Kampus No. 12"));
        assert!(alternatives.find_by_id(record.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rejects_scores_for_unknown_criteria() {
        let alternatives = Arc::new(InMemoryAlternativeRepository::new());
        let handler = CreateAlternativeHandler::new(
            alternatives.clone(),
            Arc::new(InMemoryCriterionRepository::new()),
        );
        let ghost = CriterionId::new();

        let result = handler
            .handle(CreateAlternativeCommand {
                name: "Kos Mawar".to_string(),
                scores: HashMap::from([(ghost, 1.0)]),
                ..Default::default()
            })
            .await;

        assert_eq!(result, Err(CatalogError::CriterionNotFound(ghost)));
        assert!(alternatives.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_blank_name() {
        let handler = CreateAlternativeHandler::new(
            Arc::new(InMemoryAlternativeRepository::new()),
            Arc::new(InMemoryCriterionRepository::new()),
        );

        let result = handler
            .handle(CreateAlternativeCommand {
                name: "   ".to_string(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(CatalogError::ValidationFailed { .. })));
    }
}
