//! Alternative command and query handlers.

mod create_alternative;
mod delete_alternative;
mod queries;
mod update_alternative;

pub use create_alternative::{CreateAlternativeCommand, CreateAlternativeHandler};
pub use delete_alternative::{DeleteAlternativeCommand, DeleteAlternativeHandler};
pub use queries::{GetAlternativeHandler, GetAlternativeQuery, ListAlternativesHandler};
pub use update_alternative::{UpdateAlternativeCommand, UpdateAlternativeHandler};

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::CriterionId;
use crate::ports::CriterionRepository;

/// Fails with `CriterionNotFound` for the first score key that names no
/// stored criterion.
async fn ensure_known_criteria<'a>(
    criteria: &dyn CriterionRepository,
    ids: impl Iterator<Item = &'a CriterionId>,
) -> Result<(), CatalogError> {
    let known = criteria.list().await?;
    for id in ids {
        if !known.iter().any(|c| &c.id == id) {
            return Err(CatalogError::CriterionNotFound(*id));
        }
    }
    Ok(())
}
