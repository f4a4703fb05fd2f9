//! History Module - Archived calculation runs.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CalculationId, Timestamp};
use crate::domain::topsis::{CalculationResult, Criterion};

/// One archived run: the criteria as they were weighted for the run, and the
/// result it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: CalculationId,
    pub criteria: Vec<Criterion>,
    pub result: CalculationResult,
    pub created_at: Timestamp,
}

impl CalculationRecord {
    /// Stamps a freshly computed result for archival.
    pub fn new(criteria: Vec<Criterion>, result: CalculationResult) -> Self {
        Self {
            id: CalculationId::new(),
            criteria,
            result,
            created_at: Timestamp::now(),
        }
    }
}
