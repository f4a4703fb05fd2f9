//! Calculation history port.
//!
//! Archive for finished calculations. The engine has no notion of history;
//! the ranking handler records each result here after computing it.

use async_trait::async_trait;

use crate::domain::foundation::{CalculationId, DomainError};
use crate::domain::history::CalculationRecord;

/// Port for archiving and reading back calculation runs.
#[async_trait]
pub trait CalculationHistory: Send + Sync {
    /// Archive a calculation.
    async fn record(&self, record: &CalculationRecord) -> Result<(), DomainError>;

    /// Most recent calculations first, at most `limit` entries.
    async fn list_recent(&self, limit: usize) -> Result<Vec<CalculationRecord>, DomainError>;

    /// Find an archived calculation by its ID.
    async fn find_by_id(&self, id: &CalculationId)
        -> Result<Option<CalculationRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_history_is_object_safe() {
        fn _accepts_dyn(_history: &dyn CalculationHistory) {}
    }
}
