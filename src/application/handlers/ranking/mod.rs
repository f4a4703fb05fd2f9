//! Ranking command and history query handlers.

mod calculate_ranking;
mod list_calculations;

pub use calculate_ranking::{CalculateRankingCommand, CalculateRankingHandler, RankingError};
pub use list_calculations::{
    GetCalculationHandler, GetCalculationQuery, ListCalculationsHandler, ListCalculationsQuery,
};
