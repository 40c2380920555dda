use crate::backend::BackendError;
use thiserror::Error;
use triage_core::DecisionError;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("no decision with id {0} in the queue")]
    UnknownDecision(String),

    #[error("decision {0} already has a submission in flight")]
    InFlight(String),

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error("submission failed: {0}")]
    Submission(BackendError),
}
