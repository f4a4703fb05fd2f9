//! UTC instant stamped on stored alternatives and archived calculations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serializes as an RFC 3339 string. Ordering follows time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Rendering used in HTTP responses, with an explicit `+00:00` offset.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}
