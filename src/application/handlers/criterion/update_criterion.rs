//! UpdateCriterionHandler - Command handler for editing criteria.

use std::sync::Arc;

use tracing::info;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::CriterionId;
use crate::domain::topsis::{Criterion, CriterionType};
use crate::ports::CriterionRepository;

/// Command to update a criterion. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCriterionCommand {
    pub criterion_id: CriterionId,
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub criterion_type: Option<CriterionType>,
}

/// Handler for updating criteria.
pub struct UpdateCriterionHandler {
    repository: Arc<dyn CriterionRepository>,
}

impl UpdateCriterionHandler {
    pub fn new(repository: Arc<dyn CriterionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateCriterionCommand) -> Result<Criterion, CatalogError> {
        let current = self
            .repository
            .find_by_id(&cmd.criterion_id)
            .await?
            .ok_or(CatalogError::CriterionNotFound(cmd.criterion_id))?;

        let updated = Criterion::try_new(
            current.id,
            cmd.name.as_deref().map(str::trim).unwrap_or(&current.name),
            cmd.weight.unwrap_or(current.weight),
            cmd.criterion_type.unwrap_or(current.criterion_type),
        )?;

        self.repository.update(&updated).await?;

        info!(criterion_id = %updated.id, "Criterion updated");

        Ok(updated)
    }
}
