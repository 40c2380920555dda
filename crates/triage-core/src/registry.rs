//! Decision type registry: one lookup from a wire tag to the display
//! configuration, required capabilities, and resolution path for that
//! type. Adding a decision type means adding a tag constant, a config
//! const, and one dispatch arm — not editing a conditional cascade.

use crate::builder::{
    build_approval_payload, build_categorize_payload, build_checkpoint_payload,
    build_conflict_payload, FormState,
};
use crate::decision::{
    Decision, DecisionData, TAG_APPROVAL, TAG_CATEGORIZE, TAG_CHECKPOINT, TAG_CONFLICT,
    TAG_EXTRACT,
};
use crate::error::DecisionError;
use crate::resolution::Resolution;

/// UI affordances a decision type needs from its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub countdown: bool,
    pub merge_editor: bool,
    pub project_picker: bool,
    pub type_selector: bool,
}

/// Display configuration for a decision type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeConfig {
    pub label: &'static str,
    pub accent: &'static str,
    pub icon: &'static str,
    pub capabilities: Capabilities,
}

const CHECKPOINT_CONFIG: TypeConfig = TypeConfig {
    label: "Checkpoint",
    accent: "#f59e0b",
    icon: "help-circle",
    capabilities: Capabilities {
        countdown: true,
        merge_editor: false,
        project_picker: false,
        type_selector: false,
    },
};

const APPROVAL_CONFIG: TypeConfig = TypeConfig {
    label: "Approval",
    accent: "#3b82f6",
    icon: "shield-check",
    capabilities: Capabilities {
        countdown: false,
        merge_editor: false,
        project_picker: false,
        type_selector: false,
    },
};

const CONFLICT_CONFIG: TypeConfig = TypeConfig {
    label: "Conflict",
    accent: "#ef4444",
    icon: "git-merge",
    capabilities: Capabilities {
        countdown: false,
        merge_editor: true,
        project_picker: false,
        type_selector: false,
    },
};

const CATEGORIZE_CONFIG: TypeConfig = TypeConfig {
    label: "Categorize",
    accent: "#8b5cf6",
    icon: "tag",
    capabilities: Capabilities {
        countdown: false,
        merge_editor: false,
        project_picker: true,
        type_selector: true,
    },
};

/// Look up the display configuration for a decision type tag.
///
/// The retired `extract` tag and any unrecognized tag fail with
/// `UnknownDecisionType`; callers surface that as an unsupported-card
/// error state, never a silent drop.
pub fn config_for(tag: &str) -> Result<&'static TypeConfig, DecisionError> {
    match tag {
        TAG_CHECKPOINT => Ok(&CHECKPOINT_CONFIG),
        TAG_APPROVAL => Ok(&APPROVAL_CONFIG),
        TAG_CONFLICT => Ok(&CONFLICT_CONFIG),
        TAG_CATEGORIZE => Ok(&CATEGORIZE_CONFIG),
        // `extract` is retired; decisions still carrying it render as an
        // unsupported-card error state, same as any unknown tag.
        TAG_EXTRACT => Err(DecisionError::UnknownDecisionType(TAG_EXTRACT.to_string())),
        other => Err(DecisionError::UnknownDecisionType(other.to_string())),
    }
}

/// Build a validated resolution payload for `decision` from `form`.
///
/// The single dispatch point: decodes the typed data once, checks the form
/// variant matches the decision's type, and routes to the per-type
/// builder. All validation happens here, before anything touches the
/// network.
pub fn build_resolution(
    decision: &Decision,
    form: FormState,
) -> Result<Resolution, DecisionError> {
    let data = decision.typed_data()?;
    match (data, form) {
        (DecisionData::Checkpoint(_), FormState::Checkpoint { answers }) => {
            build_checkpoint_payload(&decision.clarification_questions, &answers)
        }
        (DecisionData::Approval(_), FormState::Approval(form)) => build_approval_payload(form),
        (DecisionData::Conflict(_), FormState::Conflict(form)) => build_conflict_payload(form),
        (DecisionData::Categorize(data), FormState::Categorize(form)) => {
            build_categorize_payload(&data, form)
        }
        (data, form) => Err(DecisionError::FormMismatch {
            expected: data.kind().tag(),
            got: form.kind_name(),
        }),
    }
}
