//! Criterion query handlers.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::CriterionId;
use crate::domain::topsis::Criterion;
use crate::ports::CriterionRepository;

/// Query for a single criterion.
#[derive(Debug, Clone)]
pub struct GetCriterionQuery {
    pub criterion_id: CriterionId,
}

pub struct GetCriterionHandler {
    repository: Arc<dyn CriterionRepository>,
}

impl GetCriterionHandler {
    pub fn new(repository: Arc<dyn CriterionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetCriterionQuery) -> Result<Criterion, CatalogError> {
        self.repository
            .find_by_id(&query.criterion_id)
            .await?
            .ok_or(CatalogError::CriterionNotFound(query.criterion_id))
    }
}

/// Lists every criterion in column order.
pub struct ListCriteriaHandler {
    repository: Arc<dyn CriterionRepository>,
}

impl ListCriteriaHandler {
    pub fn new(repository: Arc<dyn CriterionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Criterion>, CatalogError> {
        Ok(self.repository.list().await?)
    }
}
