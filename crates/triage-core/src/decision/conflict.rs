use crate::error::DecisionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the two versions diverged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    Version,
    Concurrent,
}

/// One side of a file conflict.
///
/// Older backends emit `by`/`modified` instead of `actor`/`timestamp`; the
/// serde aliases normalize either spelling into the canonical shape at the
/// decode boundary, and serialization only ever emits the canonical names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionDescriptor {
    pub seq: u64,
    #[serde(alias = "modified")]
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "by")]
    pub actor: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<String>,
}

impl VersionDescriptor {
    /// Decode a version descriptor from raw JSON, accepting either the
    /// canonical or the legacy field names. Idempotent: a canonical value
    /// decodes to itself.
    pub fn normalize(value: &serde_json::Value) -> Result<Self, DecisionError> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

/// Attribute bag for a `conflict` decision — two divergent versions of a
/// file needing reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConflictData {
    pub file_path: String,
    pub conflict_type: ConflictType,
    pub my_version: VersionDescriptor,
    pub incoming_version: VersionDescriptor,
}
