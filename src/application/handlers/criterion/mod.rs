//! Criterion command and query handlers.

mod create_criterion;
mod delete_criterion;
mod queries;
mod update_criterion;

pub use create_criterion::{CreateCriterionCommand, CreateCriterionHandler};
pub use delete_criterion::{DeleteCriterionCommand, DeleteCriterionHandler};
pub use queries::{GetCriterionHandler, GetCriterionQuery, ListCriteriaHandler};
pub use update_criterion::{UpdateCriterionCommand, UpdateCriterionHandler};
