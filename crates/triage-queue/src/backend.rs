//! The backend collaborator contract: how decisions arrive and how
//! resolutions go back. Transport-agnostic — the queue neither knows nor
//! cares whether a decision came over a push channel or a poll.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use triage_core::{Decision, Resolution};

/// Pagination window for a decision fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

/// One page of decisions plus the backend's total count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionPage {
    pub decisions: Vec<Decision>,
    pub total: usize,
}

/// Machine-readable rejection from the backend: a stable error code plus a
/// human-readable message for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct BackendError {
    pub code: String,
    pub message: String,
}

impl BackendError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A live update delivered by push or polling fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionUpdate {
    /// A new or changed decision.
    Upserted(Decision),
    /// A decision resolved or withdrawn elsewhere.
    Removed { id: String },
}

/// The resolve/fetch surface the queue talks to.
///
/// Synchronous by design: the queue lives on a single-threaded event loop
/// and treats each call as one fire-and-wait request.
pub trait DecisionBackend {
    fn fetch_decisions(&self, page: PageRequest) -> Result<DecisionPage, BackendError>;

    /// Submit a resolution for the decision with `id`. `Ok(())` means the
    /// backend accepted it and the decision is gone from the active queue.
    fn submit_resolution(&self, id: &str, resolution: &Resolution) -> Result<(), BackendError>;
}
