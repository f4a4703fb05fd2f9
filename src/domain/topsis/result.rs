//! Calculation result - immutable output of one TOPSIS run.

use serde::{Deserialize, Serialize};

use super::Alternative;
use crate::domain::foundation::{AlternativeId, CriterionId};

/// One alternative's place in the ranking with its intermediate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    #[serde(flatten)]
    pub alternative: Alternative,
    pub normalized: Vec<f64>,
    pub weighted: Vec<f64>,
    pub distance_positive: f64,
    pub distance_negative: f64,
    /// Closeness to the positive ideal, in [0, 1].
    pub preference: f64,
    /// 1-based position after sorting by descending preference.
    pub rank: usize,
}

/// Ranked results plus the ideal vectors of the whole matrix.
///
/// `results` is sorted by rank. `normalized` and `weighted` keep the input
/// order of the alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub results: Vec<RankedAlternative>,
    pub ideal_positive: Vec<f64>,
    pub ideal_negative: Vec<f64>,
    /// Unit-sum weights actually applied, in criterion order.
    pub weights: Vec<f64>,
    pub normalized: Vec<Vec<f64>>,
    pub weighted: Vec<Vec<f64>>,
    /// Criteria whose column had a zero divisor and was normalized to 0.
    #[serde(default)]
    pub degenerate_criteria: Vec<CriterionId>,
}

impl CalculationResult {
    /// The top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.results.first()
    }

    /// Looks up an alternative's entry by id.
    pub fn find(&self, id: &AlternativeId) -> Option<&RankedAlternative> {
        self.results.iter().find(|r| &r.alternative.id == id)
    }

    /// Alternative ids in rank order.
    pub fn ranking(&self) -> Vec<AlternativeId> {
        self.results.iter().map(|r| r.alternative.id).collect()
    }
}
