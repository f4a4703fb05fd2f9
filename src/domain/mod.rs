//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `topsis` - Pure TOPSIS ranking engine
//! - `catalog` - Stored alternatives and catalog errors
//! - `history` - Archived calculation records

pub mod catalog;
pub mod foundation;
pub mod history;
pub mod topsis;
