pub mod approval;
pub mod categorize;
pub mod checkpoint;
pub mod conflict;

use crate::error::DecisionError;
use serde::{Deserialize, Serialize};

pub use approval::ApprovalData;
pub use categorize::{CategorizeData, FieldDescriptor};
pub use checkpoint::{AnswerValue, CheckpointData, ClarificationQuestion, QuestionKind};
pub use conflict::{ConflictData, ConflictType, VersionDescriptor};

/// Decision type tags as they appear on the wire.
pub const TAG_CHECKPOINT: &str = "checkpoint";
pub const TAG_APPROVAL: &str = "approval";
pub const TAG_CONFLICT: &str = "conflict";
pub const TAG_CATEGORIZE: &str = "categorize";

/// Retired tag kept only so its rejection is explicit.
pub(crate) const TAG_EXTRACT: &str = "extract";

/// The closed set of decision types this subsystem can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionKind {
    Checkpoint,
    Approval,
    Conflict,
    Categorize,
}

impl DecisionKind {
    /// Parse a wire tag. Unrecognized tags and the retired `extract` tag
    /// fail with `UnknownDecisionType`; neither is ever rendered.
    pub fn parse(tag: &str) -> Result<Self, DecisionError> {
        match tag {
            TAG_CHECKPOINT => Ok(Self::Checkpoint),
            TAG_APPROVAL => Ok(Self::Approval),
            TAG_CONFLICT => Ok(Self::Conflict),
            TAG_CATEGORIZE => Ok(Self::Categorize),
            // `extract` was removed from the product; decisions still
            // carrying it are surfaced as unsupported, not dropped.
            TAG_EXTRACT => Err(DecisionError::UnknownDecisionType(tag.to_string())),
            _ => Err(DecisionError::UnknownDecisionType(tag.to_string())),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Checkpoint => TAG_CHECKPOINT,
            Self::Approval => TAG_APPROVAL,
            Self::Conflict => TAG_CONFLICT,
            Self::Categorize => TAG_CATEGORIZE,
        }
    }
}

/// A unit of work requiring human input, as delivered by the backend.
///
/// `decision_type` stays a plain string here so unknown tags deserialize
/// cleanly and get rejected by the registry rather than by serde; `data`
/// stays raw until `typed_data` decodes it against the tag's shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: String,
    pub decision_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
    /// Checkpoint only; ignored for every other type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clarification_questions: Vec<ClarificationQuestion>,
}

/// A decision's `data` bag decoded against its type's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionData {
    Checkpoint(CheckpointData),
    Approval(ApprovalData),
    Conflict(ConflictData),
    Categorize(CategorizeData),
}

impl DecisionData {
    pub fn kind(&self) -> DecisionKind {
        match self {
            Self::Checkpoint(_) => DecisionKind::Checkpoint,
            Self::Approval(_) => DecisionKind::Approval,
            Self::Conflict(_) => DecisionKind::Conflict,
            Self::Categorize(_) => DecisionKind::Categorize,
        }
    }
}

impl Decision {
    /// The parsed decision kind, failing for unknown or retired tags.
    pub fn kind(&self) -> Result<DecisionKind, DecisionError> {
        DecisionKind::parse(&self.decision_type)
    }

    /// Decode the raw `data` bag into the typed shape for this decision's
    /// tag. Unknown fields in the bag are tolerated; a missing required
    /// field or an empty categorize category set is malformed data.
    pub fn typed_data(&self) -> Result<DecisionData, DecisionError> {
        let kind = self.kind()?;
        let malformed = |e: serde_json::Error| DecisionError::MalformedData {
            decision_type: kind.tag().to_string(),
            reason: e.to_string(),
        };
        match kind {
            DecisionKind::Checkpoint => Ok(DecisionData::Checkpoint(
                serde_json::from_value(self.data.clone()).map_err(malformed)?,
            )),
            DecisionKind::Approval => Ok(DecisionData::Approval(
                serde_json::from_value(self.data.clone()).map_err(malformed)?,
            )),
            DecisionKind::Conflict => Ok(DecisionData::Conflict(
                serde_json::from_value(self.data.clone()).map_err(malformed)?,
            )),
            DecisionKind::Categorize => {
                let data: CategorizeData =
                    serde_json::from_value(self.data.clone()).map_err(malformed)?;
                if data.categories.is_empty() {
                    return Err(DecisionError::MalformedData {
                        decision_type: kind.tag().to_string(),
                        reason: "categories must be non-empty".to_string(),
                    });
                }
                Ok(DecisionData::Categorize(data))
            }
        }
    }
}
