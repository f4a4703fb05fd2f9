//! Decision matrix - n alternatives by m criteria of real values.

use super::{Alternative, InvalidInputError};

/// Row-major n×m matrix. Row i belongs to the i-th alternative, column j to
/// the j-th criterion. Every row has exactly `criterion_count` finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    criterion_count: usize,
}

impl DecisionMatrix {
    /// Builds the raw matrix from the alternatives' value vectors.
    ///
    /// # Errors
    /// - `NoAlternatives` / `NoCriteria` for an empty dimension
    /// - `DimensionMismatch` if a vector length differs from `criterion_count`
    /// - `NonFiniteValue` for NaN or infinite entries
    pub fn from_alternatives(
        alternatives: &[Alternative],
        criterion_count: usize,
    ) -> Result<Self, InvalidInputError> {
        if alternatives.is_empty() {
            return Err(InvalidInputError::NoAlternatives);
        }
        if criterion_count == 0 {
            return Err(InvalidInputError::NoCriteria);
        }

        for alternative in alternatives {
            if alternative.values.len() != criterion_count {
                return Err(InvalidInputError::DimensionMismatch {
                    alternative_id: alternative.id,
                    expected: criterion_count,
                    actual: alternative.values.len(),
                });
            }
            if let Some(criterion_index) = alternative.values.iter().position(|v| !v.is_finite()) {
                return Err(InvalidInputError::NonFiniteValue {
                    alternative_id: alternative.id,
                    criterion_index,
                });
            }
        }

        Ok(Self {
            rows: alternatives.iter().map(|a| a.values.clone()).collect(),
            criterion_count,
        })
    }

    /// Wraps rows produced by a pipeline stage. Callers keep the shape.
    pub(super) fn from_rows(rows: Vec<Vec<f64>>, criterion_count: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == criterion_count));
        Self {
            rows,
            criterion_count,
        }
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Values of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[j])
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}
