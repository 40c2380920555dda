use crate::decision::AnswerValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a conflict is reconciled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConflictChoice {
    KeepMine,
    TakeTheirs,
    Merge,
}

/// The outbound artifact of resolving a decision.
///
/// Serialized adjacently tagged, matching the resolve endpoint's request
/// body: `{"decisionType": "...", "payload": {...}}`. Built only by the
/// payload builders; never constructed from partial form state directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "decisionType", content = "payload", rename_all = "snake_case")]
pub enum Resolution {
    #[serde(rename_all = "camelCase")]
    Checkpoint {
        answers: BTreeMap<String, AnswerValue>,
    },
    #[serde(rename_all = "camelCase")]
    Approval {
        approved: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feedback: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Conflict {
        choice: ConflictChoice,
        /// Present only when `choice` is `Merge`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        merge_content: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Categorize {
        category: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        project: Option<String>,
        /// Always present on the wire, `{}` when nothing was edited.
        #[serde(default)]
        field_updates: BTreeMap<String, String>,
    },
}

impl Resolution {
    /// The decision type tag this payload resolves.
    pub fn decision_type(&self) -> &'static str {
        match self {
            Self::Checkpoint { .. } => crate::decision::TAG_CHECKPOINT,
            Self::Approval { .. } => crate::decision::TAG_APPROVAL,
            Self::Conflict { .. } => crate::decision::TAG_CONFLICT,
            Self::Categorize { .. } => crate::decision::TAG_CATEGORIZE,
        }
    }
}
