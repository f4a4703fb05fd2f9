//! TOPSIS Calculator - ranks alternatives by closeness to the ideal solution.

use super::{
    Alternative, CalculationResult, Criterion, CriterionType, DecisionMatrix, InvalidInputError,
    RankedAlternative,
};

/// Positive and negative ideal vectors, one entry per criterion.
#[derive(Debug, Clone, PartialEq)]
struct IdealSolutions {
    positive: Vec<f64>,
    negative: Vec<f64>,
}

/// Euclidean separation of one alternative from each ideal.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Separation {
    positive: f64,
    negative: f64,
}

/// TOPSIS pipeline.
///
/// # Algorithm
/// 1. Normalize each column by its Euclidean norm
/// 2. Multiply by unit-sum weights
/// 3. Pick per-column ideals (benefit: max is best, cost: min is best)
/// 4. Measure each row's distance to both ideals
/// 5. preference = d⁻ / (d⁺ + d⁻), sort descending, assign ranks
///
/// All inputs are validated before stage 1; a call either fails with
/// `InvalidInputError` or returns a complete result.
pub struct TopsisCalculator;

impl TopsisCalculator {
    /// Runs the full pipeline.
    ///
    /// # Edge Cases
    /// - Column of all zeros: normalized to 0, listed in `degenerate_criteria`
    /// - Alternative equal to both ideals: preference 0
    /// - Equal preferences: input order is kept (stable sort)
    pub fn calculate(
        alternatives: &[Alternative],
        criteria: &[Criterion],
    ) -> Result<CalculationResult, InvalidInputError> {
        let matrix = DecisionMatrix::from_alternatives(alternatives, criteria.len())?;
        let weights = Self::unit_weights(criteria)?;

        let (normalized, degenerate_columns) = Self::normalize(&matrix);
        let weighted = Self::apply_weights(&normalized, &weights);
        let ideals = Self::ideal_solutions(&weighted, criteria);
        let separations = Self::separations(&weighted, &ideals);

        let mut results: Vec<RankedAlternative> = alternatives
            .iter()
            .zip(normalized.rows())
            .zip(weighted.rows())
            .zip(&separations)
            .map(|(((alternative, normalized), weighted), separation)| RankedAlternative {
                alternative: alternative.clone(),
                normalized: normalized.clone(),
                weighted: weighted.clone(),
                distance_positive: separation.positive,
                distance_negative: separation.negative,
                preference: Self::preference(separation),
                rank: 0,
            })
            .collect();

        Self::rank(&mut results);

        Ok(CalculationResult {
            results,
            ideal_positive: ideals.positive,
            ideal_negative: ideals.negative,
            weights,
            normalized: normalized.into_rows(),
            weighted: weighted.into_rows(),
            degenerate_criteria: degenerate_columns
                .into_iter()
                .map(|j| criteria[j].id)
                .collect(),
        })
    }

    /// Scales weights to a unit sum. The total is computed once, over weights
    /// first divided by the largest one so that it cannot overflow.
    fn unit_weights(criteria: &[Criterion]) -> Result<Vec<f64>, InvalidInputError> {
        if criteria.is_empty() {
            return Err(InvalidInputError::NoCriteria);
        }

        if let Some(bad) = criteria
            .iter()
            .find(|c| !c.weight.is_finite() || c.weight < 0.0)
        {
            return Err(InvalidInputError::InvalidWeight {
                criterion_id: bad.id,
                weight: bad.weight,
            });
        }

        let largest = criteria.iter().map(|c| c.weight).fold(0.0, f64::max);
        if largest == 0.0 {
            return Err(InvalidInputError::InvalidTotalWeight { total: 0.0 });
        }

        let scaled: Vec<f64> = criteria.iter().map(|c| c.weight / largest).collect();
        let total: f64 = scaled.iter().sum();

        Ok(scaled.into_iter().map(|w| w / total).collect())
    }

    /// Stage 1: vector normalization. Returns the matrix and the indices of
    /// columns whose norm was zero.
    fn normalize(matrix: &DecisionMatrix) -> (DecisionMatrix, Vec<usize>) {
        // hypot keeps large finite inputs from overflowing the sum of squares
        let divisors: Vec<f64> = (0..matrix.criterion_count())
            .map(|j| matrix.column(j).fold(0.0_f64, f64::hypot))
            .collect();

        let rows = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&divisors)
                    .map(|(&value, &divisor)| if divisor > 0.0 { value / divisor } else { 0.0 })
                    .collect()
            })
            .collect();

        let degenerate = divisors
            .iter()
            .enumerate()
            .filter(|(_, divisor)| **divisor == 0.0)
            .map(|(j, _)| j)
            .collect();

        (
            DecisionMatrix::from_rows(rows, matrix.criterion_count()),
            degenerate,
        )
    }

    /// Stage 2: column-wise multiplication by unit weights.
    fn apply_weights(normalized: &DecisionMatrix, weights: &[f64]) -> DecisionMatrix {
        let rows = normalized
            .rows()
            .iter()
            .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).collect())
            .collect();

        DecisionMatrix::from_rows(rows, normalized.criterion_count())
    }

    /// Stage 3: the only place benefit and cost criteria are told apart.
    fn ideal_solutions(weighted: &DecisionMatrix, criteria: &[Criterion]) -> IdealSolutions {
        let (positive, negative) = criteria
            .iter()
            .enumerate()
            .map(|(j, criterion)| {
                let max = weighted.column(j).fold(f64::NEG_INFINITY, f64::max);
                let min = weighted.column(j).fold(f64::INFINITY, f64::min);
                match criterion.criterion_type {
                    CriterionType::Benefit => (max, min),
                    CriterionType::Cost => (min, max),
                }
            })
            .unzip();

        IdealSolutions { positive, negative }
    }

    /// Stage 4: Euclidean distance of every row to both ideals.
    fn separations(weighted: &DecisionMatrix, ideals: &IdealSolutions) -> Vec<Separation> {
        weighted
            .rows()
            .iter()
            .map(|row| Separation {
                positive: Self::euclidean(row, &ideals.positive),
                negative: Self::euclidean(row, &ideals.negative),
            })
            .collect()
    }

    fn euclidean(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Stage 5a: relative closeness. Zero when the row sits on both ideals.
    fn preference(separation: &Separation) -> f64 {
        let total = separation.positive + separation.negative;
        if total > 0.0 {
            separation.negative / total
        } else {
            0.0
        }
    }

    /// Stage 5b: stable descending sort, then 1-based ranks.
    fn rank(results: &mut [RankedAlternative]) {
        results.sort_by(|a, b| b.preference.total_cmp(&a.preference));
        for (position, result) in results.iter_mut().enumerate() {
            result.rank = position + 1;
        }
    }
}
