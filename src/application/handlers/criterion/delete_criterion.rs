//! DeleteCriterionHandler - Removes a criterion and the scores that refer to it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::CriterionId;
use crate::ports::{AlternativeRepository, CriterionRepository};

/// Command to delete a criterion.
#[derive(Debug, Clone)]
pub struct DeleteCriterionCommand {
    pub criterion_id: CriterionId,
}

/// Handler for deleting criteria.
pub struct DeleteCriterionHandler {
    criteria: Arc<dyn CriterionRepository>,
    alternatives: Arc<dyn AlternativeRepository>,
}

impl DeleteCriterionHandler {
    pub fn new(
        criteria: Arc<dyn CriterionRepository>,
        alternatives: Arc<dyn AlternativeRepository>,
    ) -> Self {
        Self {
            criteria,
            alternatives,
        }
    }

    pub async fn handle(&self, cmd: DeleteCriterionCommand) -> Result<(), CatalogError> {
        if self.criteria.find_by_id(&cmd.criterion_id).await?.is_none() {
            return Err(CatalogError::CriterionNotFound(cmd.criterion_id));
        }

        self.criteria.delete(&cmd.criterion_id).await?;

        let mut scrubbed = 0usize;
        for mut record in self.alternatives.list().await? {
            if record.remove_score(&cmd.criterion_id) {
                self.alternatives.update(&record).await?;
                scrubbed += 1;
            }
        }

        debug!(criterion_id = %cmd.criterion_id, scrubbed, "Removed orphaned scores");
        info!(criterion_id = %cmd.criterion_id, "Criterion deleted");

        Ok(())
    }
}
