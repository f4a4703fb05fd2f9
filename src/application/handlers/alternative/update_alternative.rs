//! UpdateAlternativeHandler - Command handler for editing alternatives.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use super::ensure_known_criteria;
use crate::domain::catalog::{AlternativeRecord, CatalogError};
use crate::domain::foundation::{AlternativeId, CriterionId};
use crate::ports::{AlternativeRepository, CriterionRepository};

/// Command to update an alternative.
///
/// `metadata` replaces the stored object wholesale; `scores` are merged
/// into the existing ones.
#[derive(Debug, Clone, Default)]
pub struct UpdateAlternativeCommand {
    pub alternative_id: AlternativeId,
    pub name: Option<String>,
    pub metadata: Option<Map<String, Value>>,
    pub scores: Option<HashMap<CriterionId, f64>>,
}

/// Handler for updating alternatives.
pub struct UpdateAlternativeHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    criteria: Arc<dyn CriterionRepository>,
}

impl UpdateAlternativeHandler {
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
        cmd: UpdateAlternativeCommand,
    ) -> Result<AlternativeRecord, CatalogError> {
        let mut record = self
            .alternatives
            .find_by_id(&cmd.alternative_id)
            .await?
            .ok_or(CatalogError::AlternativeNotFound(cmd.alternative_id))?;

        if let Some(name) = cmd.name {
            record.rename(name)?;
        }
        if let Some(metadata) = cmd.metadata {
            record.replace_metadata(metadata);
        }
        if let Some(scores) = cmd.scores {
            ensure_known_criteria(self.criteria.as_ref(), scores.keys()).await?;
            record.merge_scores(scores)?;
        }

        self.alternatives.update(&record).await?;

        info!(alternative_id = %record.id(), "Alternative updated");

        Ok(record)
    }
}
