//! In-memory calculation history.
//!
//! Bounded: once `capacity` records are held, the oldest is evicted.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CalculationId, DomainError};
use crate::domain::history::CalculationRecord;
use crate::ports::CalculationHistory;

/// Default number of archived calculations kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// In-memory archive of calculation records, newest at the front
#[derive(Debug, Clone)]
pub struct InMemoryCalculationHistory {
    records: Arc<RwLock<VecDeque<CalculationRecord>>>,
    capacity: usize,
}

impl InMemoryCalculationHistory {
    /// Create a history holding at most `capacity` records (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(RwLock::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Get the number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryCalculationHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

#[async_trait]
impl CalculationHistory for InMemoryCalculationHistory {
    async fn record(&self, record: &CalculationRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.push_front(record.clone());
        records.truncate(self.capacity);
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<CalculationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().take(limit).cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: &CalculationId,
    ) -> Result<Option<CalculationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| &r.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{Alternative, Criterion, TopsisCalculator};

    fn sample_record() -> CalculationRecord {
        let criteria = vec![Criterion::benefit("Facilities", 1.0).unwrap()];
        let alts = vec![Alternative::new("A", vec![3.0]), Alternative::new("B", vec![4.0])];
        let result = TopsisCalculator::calculate(&alts, &criteria).unwrap();
        CalculationRecord::new(criteria, result)
    }

    #[tokio::test]
    async fn list_recent_returns_newest_first() {
        let history = InMemoryCalculationHistory::default();
        let first = sample_record();
        let second = sample_record();
        history.record(&first).await.unwrap();
        history.record(&second).await.unwrap();

        let recent = history.list_recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, second.id);
        assert_eq!(recent[1].id, first.id);
    }

    #[tokio::test]
    async fn list_recent_honours_limit() {
        let history = InMemoryCalculationHistory::default();
        for _ in 0..5 {
            history.record(&sample_record()).await.unwrap();
        }
        assert_eq!(history.list_recent(3).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn capacity_evicts_oldest() {
        let history = InMemoryCalculationHistory::with_capacity(2);
        let oldest = sample_record();
        history.record(&oldest).await.unwrap();
        history.record(&sample_record()).await.unwrap();
        history.record(&sample_record()).await.unwrap();

        assert_eq!(history.len().await, 2);
        assert!(history.find_by_id(&oldest.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_returns_record() {
        let history = InMemoryCalculationHistory::default();
        let record = sample_record();
        history.record(&record).await.unwrap();

        let found = history.find_by_id(&record.id).await.unwrap();
        assert_eq!(found, Some(record));
    }
}
