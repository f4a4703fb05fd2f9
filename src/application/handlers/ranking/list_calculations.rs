//! Calculation history query handlers.

use std::sync::Arc;

use super::RankingError;
use crate::domain::foundation::CalculationId;
use crate::domain::history::CalculationRecord;
use crate::ports::CalculationHistory;

/// Query for recent calculations. `limit` falls back to the configured
/// default and is capped at `max_limit`.
#[derive(Debug, Clone, Default)]
pub struct ListCalculationsQuery {
    pub limit: Option<usize>,
}

pub struct ListCalculationsHandler {
    history: Arc<dyn CalculationHistory>,
    default_limit: usize,
    max_limit: usize,
}

impl ListCalculationsHandler {
    pub fn new(history: Arc<dyn CalculationHistory>, default_limit: usize, max_limit: usize) -> Self {
        Self {
            history,
            default_limit,
            max_limit: max_limit.max(1),
        }
    }

    pub async fn handle(
        &self,
        query: ListCalculationsQuery,
    ) -> Result<Vec<CalculationRecord>, RankingError> {
        let limit = query
            .limit
            .unwrap_or(self.default_limit)
            .min(self.max_limit);
        Ok(self.history.list_recent(limit).await?)
    }
}

/// Query for one archived calculation.
#[derive(Debug, Clone)]
pub struct GetCalculationQuery {
    pub calculation_id: CalculationId,
}

pub struct GetCalculationHandler {
    history: Arc<dyn CalculationHistory>,
}

impl GetCalculationHandler {
    pub fn new(history: Arc<dyn CalculationHistory>) -> Self {
        Self { history }
    }

    pub async fn handle(
        &self,
        query: GetCalculationQuery,
    ) -> Result<CalculationRecord, RankingError> {
        self.history
            .find_by_id(&query.calculation_id)
            .await?
            .ok_or(RankingError::CalculationNotFound(query.calculation_id))
    }
}
