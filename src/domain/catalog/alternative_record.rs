//! Alternative record - the stored form of an alternative.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::CatalogError;
use crate::domain::foundation::{AlternativeId, CriterionId, Timestamp, ValidationError};
use crate::domain::topsis::{Alternative, Criterion};

/// A catalog entry. Scores are keyed by criterion so that adding or removing
/// a criterion never shifts the other values; the ordered vector the
/// calculator needs is assembled with [`AlternativeRecord::to_alternative`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRecord {
    id: AlternativeId,
    name: String,
    metadata: Map<String, Value>,
    scores: HashMap<CriterionId, f64>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AlternativeRecord {
    /// Creates a new record.
    ///
    /// # Errors
    /// - `EmptyField` for a blank name
    /// - `NotFinite` if any score is NaN or infinite
    pub fn new(
        name: impl Into<String>,
        metadata: Map<String, Value>,
        scores: HashMap<CriterionId, f64>,
    ) -> Result<Self, ValidationError> {
        let name = Self::validated_name(name.into())?;
        Self::check_scores(&scores)?;
        let now = Timestamp::now();

        Ok(Self {
            id: AlternativeId::new(),
            name,
            metadata,
            scores,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &AlternativeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn scores(&self) -> &HashMap<CriterionId, f64> {
        &self.scores
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn score_for(&self, criterion_id: &CriterionId) -> Option<f64> {
        self.scores.get(criterion_id).copied()
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = Self::validated_name(name.into())?;
        self.touch();
        Ok(())
    }

    pub fn replace_metadata(&mut self, metadata: Map<String, Value>) {
        self.metadata = metadata;
        self.touch();
    }

    /// Overwrites the given scores, leaving the others untouched.
    pub fn merge_scores(&mut self, scores: HashMap<CriterionId, f64>) -> Result<(), ValidationError> {
        Self::check_scores(&scores)?;
        self.scores.extend(scores);
        self.touch();
        Ok(())
    }

    /// Drops the score for a criterion. Returns whether one was present.
    pub fn remove_score(&mut self, criterion_id: &CriterionId) -> bool {
        let removed = self.scores.remove(criterion_id).is_some();
        if removed {
            self.touch();
        }
        removed
    }

    /// Assembles the calculator input, one value per criterion in the given
    /// order.
    pub fn to_alternative(&self, criteria: &[Criterion]) -> Result<Alternative, CatalogError> {
        let values = criteria
            .iter()
            .map(|c| {
                self.score_for(&c.id).ok_or(CatalogError::MissingScore {
                    alternative_id: self.id,
                    criterion_id: c.id,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Alternative {
            id: self.id,
            name: self.name.clone(),
            metadata: self.metadata.clone(),
            values,
        })
    }

    fn validated_name(name: String) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(trimmed.to_string())
    }

    fn check_scores(scores: &HashMap<CriterionId, f64>) -> Result<(), ValidationError> {
        if scores.values().any(|v| !v.is_finite()) {
            return Err(ValidationError::not_finite("scores"));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
