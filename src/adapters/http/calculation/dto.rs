//! HTTP DTOs for calculation endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::adapters::http::criterion::CriterionResponse;
use crate::domain::foundation::CriterionId;
use crate::domain::history::CalculationRecord;
use crate::domain::topsis::RankedAlternative;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to run a calculation. `weights` overrides stored criterion
/// weights for this run only; `{}` uses the stored weights.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub weights: HashMap<CriterionId, f64>,
}

/// Query parameters for listing calculations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCalculationsParams {
    #[serde(default)]
    pub limit: Option<usize>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One ranked alternative. The alternative's own fields are inlined next to
/// the computed values.
#[derive(Debug, Clone, Serialize)]
pub struct RankedAlternativeResponse {
    pub id: String,
    pub name: String,
    pub metadata: Map<String, Value>,
    pub values: Vec<f64>,
    pub normalized: Vec<f64>,
    pub weighted: Vec<f64>,
    pub distance_positive: f64,
    pub distance_negative: f64,
    pub preference: f64,
    pub rank: usize,
}

impl From<RankedAlternative> for RankedAlternativeResponse {
    fn from(ranked: RankedAlternative) -> Self {
        Self {
            id: ranked.alternative.id.to_string(),
            name: ranked.alternative.name,
            metadata: ranked.alternative.metadata,
            values: ranked.alternative.values,
            normalized: ranked.normalized,
            weighted: ranked.weighted,
            distance_positive: ranked.distance_positive,
            distance_negative: ranked.distance_negative,
            preference: ranked.preference,
            rank: ranked.rank,
        }
    }
}

/// A calculation run with everything needed to explain its ranking.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub id: String,
    pub created_at: String,
    /// Criteria in column order, with the weights used for this run.
    pub criteria: Vec<CriterionResponse>,
    pub results: Vec<RankedAlternativeResponse>,
    pub ideal_positive: Vec<f64>,
    pub ideal_negative: Vec<f64>,
    pub weights: Vec<f64>,
    pub normalized: Vec<Vec<f64>>,
    pub weighted: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degenerate_criteria: Vec<String>,
}

impl From<CalculationRecord> for CalculationResponse {
    fn from(record: CalculationRecord) -> Self {
        let result = record.result;
        Self {
            id: record.id.to_string(),
            created_at: record.created_at.to_rfc3339(),
            criteria: record.criteria.into_iter().map(Into::into).collect(),
            results: result.results.into_iter().map(Into::into).collect(),
            ideal_positive: result.ideal_positive,
            ideal_negative: result.ideal_negative,
            weights: result.weights,
            normalized: result.normalized,
            weighted: result.weighted,
            degenerate_criteria: result
                .degenerate_criteria
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationListResponse {
    pub items: Vec<CalculationResponse>,
}

impl From<Vec<CalculationRecord>> for CalculationListResponse {
    fn from(records: Vec<CalculationRecord>) -> Self {
        Self {
            items: records.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{Alternative, Criterion, TopsisCalculator};

    #[test]
    fn empty_request_has_no_overrides() {
        let req: CalculateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.weights.is_empty());
    }

    #[test]
    fn response_inlines_alternative_fields() {
        let criteria = vec![Criterion::cost("Price", 1.0).unwrap()];
        let alternatives = vec![
            Alternative::new("Kos Melati", vec![1_000_000.0]).with_metadata("rooms", 8),
            Alternative::new("Kos Mawar", vec![2_000_000.0]),
        ];
        let result = TopsisCalculator::calculate(&alternatives, &criteria).unwrap();
        let record = CalculationRecord::new(criteria, result);

        let response: CalculationResponse = record.into();
        let value = serde_json::to_value(&response).unwrap();

        let best = &value["results"][0];
        assert_eq!(best["name"], "Kos Melati");
        assert_eq!(best["metadata"]["rooms"], 8);
        assert_eq!(best["rank"], 1);
        assert!(best.get("preference").is_some());
        assert_eq!(value["criteria"][0]["type"], "cost");
        assert!(value.get("degenerate_criteria").is_none());
    }
}
