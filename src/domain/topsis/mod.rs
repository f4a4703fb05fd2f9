//! TOPSIS Module - Pure ranking engine.
//!
//! Ranks alternatives scored against weighted benefit/cost criteria by their
//! relative closeness to an ideal solution.
//!
//! # Components
//!
//! - `Criterion` / `CriterionType` - weighted dimension with its polarity
//! - `Alternative` - candidate with one raw score per criterion
//! - `DecisionMatrix` - validated n×m matrix built per calculation
//! - `TopsisCalculator` - the five-stage pipeline
//! - `CalculationResult` - ranked output with ideals and intermediate matrices
//!
//! Nothing here performs I/O or logs; callers fetch the data, invoke the
//! calculator and decide what to do with the result.

mod alternative;
mod calculator;
mod criterion;
mod decision_matrix;
mod errors;
mod result;

pub use alternative::Alternative;
pub use calculator::TopsisCalculator;
pub use criterion::{Criterion, CriterionType};
pub use decision_matrix::DecisionMatrix;
pub use errors::InvalidInputError;
pub use result::{CalculationResult, RankedAlternative};
