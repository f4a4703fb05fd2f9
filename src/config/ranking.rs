//! Ranking configuration

use serde::Deserialize;

use super::error::ValidationError;

const MAX_HISTORY_CAPACITY: usize = 10_000;

/// Calculation history settings
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Number of calculations returned when a listing gives no limit
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Number of calculations kept before the oldest are evicted
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_capacity == 0 || self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ValidationError::InvalidHistoryCapacity);
        }
        if self.history_limit == 0 || self.history_limit > self.history_capacity {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            history_capacity: default_history_capacity(),
        }
    }
}

fn default_history_limit() -> usize {
    10
}

fn default_history_capacity() -> usize {
    100
}
