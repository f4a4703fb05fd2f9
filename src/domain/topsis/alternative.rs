//! Alternative - a candidate being ranked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::AlternativeId;

/// A candidate with one raw score per criterion, in criterion order.
///
/// `metadata` is opaque to the engine and is copied into the result as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates an alternative with a fresh id and no metadata.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: AlternativeId::new(),
            name: name.into(),
            metadata: Map::new(),
            values,
        }
    }

    /// Attaches a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_is_preserved_in_json() {
        let alt = Alternative::new("Kos Harmoni", vec![1_200_000.0, 1.5])
            .with_metadata("address", "Jl. Diponegoro No. 22");

        let json = serde_json::to_value(&alt).unwrap();
        assert_eq!(json["metadata"]["address"], "Jl. Diponegoro No. 22");
        assert_eq!(json["values"][1], 1.5);
    }

    #[test]
    fn missing_metadata_deserializes_empty() {
        let id = AlternativeId::new();
        let json = format!(r#"{{"id":"{}","name":"A","values":[1.0]}}"#, id);
        let alt: Alternative = serde_json::from_str(&json).unwrap();
        assert!(alt.metadata.is_empty());
        assert_eq!(alt.id, id);
    }
}
