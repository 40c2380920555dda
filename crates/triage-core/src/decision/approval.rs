use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attribute bag for an `approval` decision — a binary authorize/deny gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalData {
    /// The action awaiting authorization, e.g. "Deploy v2".
    pub action: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<DateTime<Utc>>,
}
