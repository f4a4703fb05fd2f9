//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod alternative;
pub mod criterion;
pub mod ranking;

pub use alternative::{
    CreateAlternativeCommand, CreateAlternativeHandler, DeleteAlternativeCommand,
    DeleteAlternativeHandler, GetAlternativeHandler, GetAlternativeQuery, ListAlternativesHandler,
    UpdateAlternativeCommand, UpdateAlternativeHandler,
};
pub use criterion::{
    CreateCriterionCommand, CreateCriterionHandler, DeleteCriterionCommand,
    DeleteCriterionHandler, GetCriterionHandler, GetCriterionQuery, ListCriteriaHandler,
    UpdateCriterionCommand, UpdateCriterionHandler,
};
pub use ranking::{
    CalculateRankingCommand, CalculateRankingHandler, GetCalculationHandler, GetCalculationQuery,
    ListCalculationsHandler, ListCalculationsQuery, RankingError,
};
