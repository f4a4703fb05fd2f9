//! CalculateRanking command handler.
//!
//! Assembles the decision matrix from the catalog, runs the TOPSIS engine
//! and archives the outcome.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{CalculationId, CriterionId, DomainError, ErrorCode};
use crate::domain::history::CalculationRecord;
use crate::domain::topsis::{Alternative, Criterion, InvalidInputError, TopsisCalculator};
use crate::ports::{AlternativeRepository, CalculationHistory, CriterionRepository};

/// Command to rank every stored alternative.
///
/// `weight_overrides` replace stored weights for this run only.
#[derive(Debug, Clone, Default)]
pub struct CalculateRankingCommand {
    pub weight_overrides: HashMap<CriterionId, f64>,
}

/// Errors that can occur while producing or reading rankings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// The assembled input failed engine validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The catalog could not be turned into a matrix.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Calculation not found: {0}")]
    CalculationNotFound(CalculationId),

    #[error("Storage error: {0}")]
    Infrastructure(String),
}

impl RankingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::InvalidInput(_) => ErrorCode::InvalidInput,
            RankingError::Catalog(e) => e.code(),
            RankingError::CalculationNotFound(_) => ErrorCode::CalculationNotFound,
            RankingError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for RankingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::StorageError | ErrorCode::InternalError => {
                RankingError::Infrastructure(err.to_string())
            }
            _ => RankingError::Catalog(err.into()),
        }
    }
}

/// Handler for computing rankings.
pub struct CalculateRankingHandler {
    criteria: Arc<dyn CriterionRepository>,
    alternatives: Arc<dyn AlternativeRepository>,
    history: Arc<dyn CalculationHistory>,
}

impl CalculateRankingHandler {
    pub fn new(
        criteria: Arc<dyn CriterionRepository>,
        alternatives: Arc<dyn AlternativeRepository>,
        history: Arc<dyn CalculationHistory>,
    ) -> Self {
        Self {
            criteria,
            alternatives,
            history,
        }
    }

    pub async fn handle(
        &self,
        cmd: CalculateRankingCommand,
    ) -> Result<CalculationRecord, RankingError> {
        let criteria = apply_overrides(self.criteria.list().await?, &cmd.weight_overrides)?;

        let alternatives = self
            .alternatives
            .list()
            .await?
            .iter()
            .map(|record| record.to_alternative(&criteria))
            .collect::<Result<Vec<Alternative>, CatalogError>>()?;

        let result = TopsisCalculator::calculate(&alternatives, &criteria).map_err(|e| {
            warn!(error = %e, "Ranking input rejected");
            e
        })?;

        if !result.degenerate_criteria.is_empty() {
            debug!(
                degenerate = ?result.degenerate_criteria,
                "Criteria with an all-zero column contributed nothing"
            );
        }

        let record = CalculationRecord::new(criteria, result);
        self.history.record(&record).await?;

        info!(
            calculation_id = %record.id,
            alternatives = record.result.results.len(),
            criteria = record.criteria.len(),
            best = record.result.best().map(|r| r.alternative.name.as_str()).unwrap_or(""),
            "Ranking calculated"
        );

        Ok(record)
    }
}

/// Substitutes per-run weights. Every override must name a stored criterion.
fn apply_overrides(
    criteria: Vec<Criterion>,
    overrides: &HashMap<CriterionId, f64>,
) -> Result<Vec<Criterion>, RankingError> {
    if let Some(unknown) = overrides
        .keys()
        .find(|id| !criteria.iter().any(|c| &c.id == *id))
    {
        return Err(CatalogError::CriterionNotFound(*unknown).into());
    }

    criteria
        .into_iter()
        .map(|c| match overrides.get(&c.id) {
            Some(&weight) => c
                .with_weight(weight)
                .map_err(|e| RankingError::Catalog(e.into())),
            None => Ok(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAlternativeRepository, InMemoryCalculationHistory, InMemoryCriterionRepository,
    };
    use crate::domain::catalog::AlternativeRecord;
    use serde_json::Map;

    struct Fixture {
        criteria: Arc<InMemoryCriterionRepository>,
        alternatives: Arc<InMemoryAlternativeRepository>,
        history: Arc<InMemoryCalculationHistory>,
        handler: CalculateRankingHandler,
    }

    fn fixture() -> Fixture {
        let criteria = Arc::new(InMemoryCriterionRepository::new());
        let alternatives = Arc::new(InMemoryAlternativeRepository::new());
        let history = Arc::new(InMemoryCalculationHistory::default());
        let handler =
            CalculateRankingHandler::new(criteria.clone(), alternatives.clone(), history.clone());
        Fixture {
            criteria,
            alternatives,
            history,
            handler,
        }
    }

    async fn add_alternative(f: &Fixture, name: &str, scores: &[(CriterionId, f64)]) -> AlternativeRecord {
        let record =
            AlternativeRecord::new(name, Map::new(), scores.iter().copied().collect()).unwrap();
        f.alternatives.save(&record).await.unwrap();
        record
    }

    #[tokio::test]
    async fn ranks_cheaper_alternative_first_and_archives_run() {
        let f = fixture();
        let price = Criterion::cost("Price", 1.0).unwrap();
        f.criteria.save(&price).await.unwrap();
        add_alternative(&f, "Pricey", &[(price.id, 3.0)]).await;
        let cheap = add_alternative(&f, "Cheap", &[(price.id, 1.0)]).await;

        let record = f
            .handler
            .handle(CalculateRankingCommand::default())
            .await
            .unwrap();

        assert_eq!(record.result.best().unwrap().alternative.id, *cheap.id());
        assert_eq!(f.history.len().await, 1);
        assert_eq!(
            f.history.find_by_id(&record.id).await.unwrap(),
            Some(record)
        );
    }

    #[tokio::test]
    async fn weight_override_changes_ranking_for_that_run_only() {
        let f = fixture();
        let price = Criterion::cost("Price", 1.0).unwrap();
        let security = Criterion::benefit("Security", 0.0).unwrap();
        f.criteria.save(&price).await.unwrap();
        f.criteria.save(&security).await.unwrap();
        let cheap = add_alternative(&f, "Cheap", &[(price.id, 1.0), (security.id, 1.0)]).await;
        let safe = add_alternative(&f, "Safe", &[(price.id, 2.0), (security.id, 10.0)]).await;

        let baseline = f
            .handler
            .handle(CalculateRankingCommand::default())
            .await
            .unwrap();
        assert_eq!(baseline.result.best().unwrap().alternative.id, *cheap.id());

        let overridden = f
            .handler
            .handle(CalculateRankingCommand {
                weight_overrides: HashMap::from([(price.id, 0.0), (security.id, 1.0)]),
            })
            .await
            .unwrap();
        assert_eq!(overridden.result.best().unwrap().alternative.id, *safe.id());
        assert_eq!(overridden.criteria[1].weight, 1.0);

        let stored = f.criteria.find_by_id(&price.id).await.unwrap().unwrap();
        assert_eq!(stored.weight, 1.0);
    }

    #[tokio::test]
    async fn unknown_override_is_rejected() {
        let f = fixture();
        let price = Criterion::cost("Price", 1.0).unwrap();
        f.criteria.save(&price).await.unwrap();
        add_alternative(&f, "Only", &[(price.id, 1.0)]).await;
        let ghost = CriterionId::new();

        let result = f
            .handler
            .handle(CalculateRankingCommand {
                weight_overrides: HashMap::from([(ghost, 1.0)]),
            })
            .await;

        assert_eq!(
            result,
            Err(RankingError::Catalog(CatalogError::CriterionNotFound(ghost)))
        );
        assert!(f.history.is_empty().await);
    }

    #[tokio::test]
    async fn negative_override_is_a_validation_failure() {
        let f = fixture();
        let price = Criterion::cost("Price", 1.0).unwrap();
        f.criteria.save(&price).await.unwrap();

        let result = f
            .handler
            .handle(CalculateRankingCommand {
                weight_overrides: HashMap::from([(price.id, -1.0)]),
            })
            .await;

        assert!(matches!(
            result,
            Err(RankingError::Catalog(CatalogError::ValidationFailed { .. }))
        ));
    }

    #[tokio::test]
    async fn missing_score_blocks_calculation() {
        let f = fixture();
        let price = Criterion::cost("Price", 1.0).unwrap();
        let distance = Criterion::cost("Distance", 1.0).unwrap();
        f.criteria.save(&price).await.unwrap();
        f.criteria.save(&distance).await.unwrap();
        let partial = add_alternative(&f, "Partial", &[(price.id, 1.0)]).await;

        let result = f.handler.handle(CalculateRankingCommand::default()).await;

        assert_eq!(
            result,
            Err(RankingError::Catalog(CatalogError::MissingScore {
                alternative_id: *partial.id(),
                criterion_id: distance.id,
            }))
        );
    }

    #[tokio::test]
    async fn empty_catalog_is_invalid_input() {
        let f = fixture();
        let price = Criterion::cost("Price", 1.0).unwrap();
        f.criteria.save(&price).await.unwrap();

        let result = f.handler.handle(CalculateRankingCommand::default()).await;
        assert_eq!(
            result,
            Err(RankingError::InvalidInput(InvalidInputError::NoAlternatives))
        );
    }

    #[tokio::test]
    async fn all_zero_weights_are_invalid_input() {
        let f = fixture();
        let price = Criterion::cost("Price", 0.0).unwrap();
        f.criteria.save(&price).await.unwrap();
        add_alternative(&f, "Only", &[(price.id, 1.0)]).await;

        let result = f.handler.handle(CalculateRankingCommand::default()).await;
        assert!(matches!(
            result,
            Err(RankingError::InvalidInput(
                InvalidInputError::InvalidTotalWeight { .. }
            ))
        ));
    }

    #[test]
    fn storage_failure_maps_to_infrastructure() {
        let err: RankingError = DomainError::storage("lock poisoned").into();
        assert!(matches!(err, RankingError::Infrastructure(_)));
    }
}
