//! HTTP DTOs for criterion endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::topsis::{Criterion, CriterionType};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a criterion.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCriterionRequest {
    pub name: String,
    pub weight: f64,
    #[serde(rename = "type", alias = "criterion_type")]
    pub criterion_type: CriterionType,
}

/// Request to update a criterion. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCriterionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default, rename = "type", alias = "criterion_type")]
    pub criterion_type: Option<CriterionType>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CriterionResponse {
    pub id: String,
    pub name: String,
    pub weight: f64,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
}

impl From<Criterion> for CriterionResponse {
    fn from(criterion: Criterion) -> Self {
        Self {
            id: criterion.id.to_string(),
            name: criterion.name,
            weight: criterion.weight,
            criterion_type: criterion.criterion_type,
        }
    }
}

/// All criteria with the sum of their raw weights.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionListResponse {
    pub items: Vec<CriterionResponse>,
    pub total_weight: f64,
}

impl From<Vec<Criterion>> for CriterionListResponse {
    fn from(criteria: Vec<Criterion>) -> Self {
        let total_weight = criteria.iter().map(|c| c.weight).sum();
        Self {
            items: criteria.into_iter().map(Into::into).collect(),
            total_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_type_field() {
        let json = r#"{"name": "Price", "weight": 30, "type": "cost"}"#;
        let req: CreateCriterionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Price");
        assert_eq!(req.weight, 30.0);
        assert_eq!(req.criterion_type, CriterionType::Cost);
    }

    #[test]
    fn update_request_allows_partial_body() {
        let req: UpdateCriterionRequest = serde_json::from_str(r#"{"weight": 12.5}"#).unwrap();
        assert_eq!(req.weight, Some(12.5));
        assert!(req.name.is_none());
        assert!(req.criterion_type.is_none());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let json = r#"{"name": "Price", "weight": 30, "type": "neutral"}"#;
        assert!(serde_json::from_str::<CreateCriterionRequest>(json).is_err());
    }

    #[test]
    fn list_response_sums_weights() {
        let list: CriterionListResponse = vec![
            Criterion::cost("Price", 30.0).unwrap(),
            Criterion::benefit("Security", 15.0).unwrap(),
        ]
        .into();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.total_weight, 45.0);
    }

    #[test]
    fn response_serializes_type_key() {
        let response: CriterionResponse = Criterion::benefit("Facilities", 20.0).unwrap().into();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "benefit");
    }
}
