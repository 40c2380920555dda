//! Pure resolution payload builders: `(decision data, form state)` in,
//! validated `Resolution` out. No network, no clocks, no mutation.

use crate::decision::{
    AnswerValue, CategorizeData, ClarificationQuestion, QuestionKind,
};
use crate::error::DecisionError;
use crate::resolution::{ConflictChoice, Resolution};
use std::collections::BTreeMap;

/// User-collected input for an approval decision.
///
/// `approved` is optional here because the form starts unset; building the
/// payload requires it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApprovalForm {
    pub approved: Option<bool>,
    pub feedback: Option<String>,
}

/// User-collected input for a conflict decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictForm {
    pub choice: ConflictChoice,
    pub merge_content: Option<String>,
}

/// User-collected input for a categorize decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizeForm {
    pub category: Option<String>,
    pub project: Option<String>,
    pub field_updates: BTreeMap<String, String>,
}

/// Form state for any decision type, the input to the registry dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Checkpoint {
        answers: BTreeMap<String, AnswerValue>,
    },
    Approval(ApprovalForm),
    Conflict(ConflictForm),
    Categorize(CategorizeForm),
}

impl FormState {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Checkpoint { .. } => "checkpoint",
            Self::Approval(_) => "approval",
            Self::Conflict(_) => "conflict",
            Self::Categorize(_) => "categorize",
        }
    }
}

/// Build a checkpoint resolution from per-question answers.
///
/// Every question lacking a default needs a non-blank answer; the first
/// unanswered one (in question order) names the validation failure. A
/// question with a default falls back to it when unanswered. Number
/// questions only accept numeric answers.
pub fn build_checkpoint_payload(
    questions: &[ClarificationQuestion],
    answers: &BTreeMap<String, AnswerValue>,
) -> Result<Resolution, DecisionError> {
    let mut resolved = BTreeMap::new();
    for question in questions {
        let supplied = answers.get(&question.id).filter(|a| !a.is_blank());
        let value = match (supplied, &question.default) {
            (Some(answer), _) => answer.clone(),
            (None, Some(default)) => default.clone(),
            (None, None) => return Err(DecisionError::validation(&question.id)),
        };
        if question.kind == QuestionKind::Number && !matches!(value, AnswerValue::Number(_)) {
            return Err(DecisionError::validation(&question.id));
        }
        resolved.insert(question.id.clone(), value);
    }
    Ok(Resolution::Checkpoint { answers: resolved })
}

/// Build an approval resolution. Feedback passes through unmodified; any
/// length limits belong to the backend.
pub fn build_approval_payload(form: ApprovalForm) -> Result<Resolution, DecisionError> {
    let approved = form
        .approved
        .ok_or_else(|| DecisionError::validation("approved"))?;
    Ok(Resolution::Approval {
        approved,
        feedback: form.feedback,
    })
}

/// Build a conflict resolution. Merge requires non-empty content (checked
/// after trimming, passed through untrimmed); the other choices never
/// carry content, even when the form still holds editor text.
pub fn build_conflict_payload(form: ConflictForm) -> Result<Resolution, DecisionError> {
    let merge_content = match form.choice {
        ConflictChoice::Merge => {
            let content = form
                .merge_content
                .filter(|c| !c.trim().is_empty())
                .ok_or_else(|| DecisionError::validation("mergeContent"))?;
            Some(content)
        }
        ConflictChoice::KeepMine | ConflictChoice::TakeTheirs => None,
    };
    Ok(Resolution::Conflict {
        choice: form.choice,
        merge_content,
    })
}

/// Build a categorize resolution. The category must come from the
/// decision's allowed set, the project (when given) from its project set.
/// Updates to non-editable fields are dropped silently rather than
/// rejected.
pub fn build_categorize_payload(
    data: &CategorizeData,
    form: CategorizeForm,
) -> Result<Resolution, DecisionError> {
    let category = form
        .category
        .filter(|c| data.categories.contains(c))
        .ok_or_else(|| DecisionError::validation("category"))?;

    if let Some(project) = &form.project {
        if !data.projects.contains(project) {
            return Err(DecisionError::validation("project"));
        }
    }

    let field_updates = form
        .field_updates
        .into_iter()
        .filter(|(name, _)| data.is_editable_field(name))
        .collect();

    Ok(Resolution::Categorize {
        category,
        project: form.project,
        field_updates,
    })
}
