//! HTTP DTOs for alternative endpoints.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::catalog::AlternativeRecord;
use crate::domain::foundation::CriterionId;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create an alternative. `scores` maps criterion ids to raw
/// values; `metadata` is opaque and echoed back in rankings.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlternativeRequest {
    pub name: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub scores: HashMap<CriterionId, f64>,
}

/// Request to update an alternative. Given scores are merged into the
/// stored ones; given metadata replaces the stored object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlternativeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub scores: Option<HashMap<CriterionId, f64>>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct AlternativeResponse {
    pub id: String,
    pub name: String,
    pub metadata: Map<String, Value>,
    pub scores: BTreeMap<String, f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AlternativeRecord> for AlternativeResponse {
    fn from(record: AlternativeRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            metadata: record.metadata().clone(),
            scores: record
                .scores()
                .iter()
                .map(|(id, value)| (id.to_string(), *value))
                .collect(),
            created_at: record.created_at().to_rfc3339(),
            updated_at: record.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlternativeListResponse {
    pub items: Vec<AlternativeResponse>,
    pub total: usize,
}

impl From<Vec<AlternativeRecord>> for AlternativeListResponse {
    fn from(records: Vec<AlternativeRecord>) -> Self {
        Self {
            total: records.len(),
            items: records.into_iter().map(Into::into).collect(),
        }
    }
}
