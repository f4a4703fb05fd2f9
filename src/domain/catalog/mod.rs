//! Catalog Module - Alternatives and criteria as they are stored.
//!
//! Criteria are stored as [`Criterion`](crate::domain::topsis::Criterion)
//! values directly; alternatives get a record type keyed by criterion id.

mod alternative_record;
mod errors;

pub use alternative_record::AlternativeRecord;
pub use errors::CatalogError;
