//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the catalog or archive rankings; query handlers
//! only read.

pub mod handlers;

pub use handlers::{
    // Criterion handlers
    CreateCriterionCommand, CreateCriterionHandler, DeleteCriterionCommand,
    DeleteCriterionHandler, GetCriterionHandler, GetCriterionQuery, ListCriteriaHandler,
    UpdateCriterionCommand, UpdateCriterionHandler,
    // Alternative handlers
    CreateAlternativeCommand, CreateAlternativeHandler, DeleteAlternativeCommand,
    DeleteAlternativeHandler, GetAlternativeHandler, GetAlternativeQuery, ListAlternativesHandler,
    UpdateAlternativeCommand, UpdateAlternativeHandler,
    // Ranking handlers
    CalculateRankingCommand, CalculateRankingHandler, GetCalculationHandler, GetCalculationQuery,
    ListCalculationsHandler, ListCalculationsQuery, RankingError,
};
