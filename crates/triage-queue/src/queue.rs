//! The pending-decision queue: insertion-ordered, mutated synchronously by
//! its caller (the UI event loop), no locks. A decision is `Pending`,
//! `Deferred`, or `Resolving`; a resolved decision leaves the queue.

use crate::backend::{DecisionBackend, DecisionPage, DecisionUpdate};
use crate::error::QueueError;
use triage_core::{build_resolution, Decision, FormState, Resolution};

/// Where a queued decision sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionStatus {
    /// Awaiting display and user input.
    Pending,
    /// Put aside by the user; re-surfaced on restore.
    Deferred,
    /// A submission is in flight; exists only between send and response.
    Resolving,
}

#[derive(Debug, Clone)]
struct Entry {
    decision: Decision,
    status: DecisionStatus,
}

/// The active queue of decisions awaiting human input.
#[derive(Debug, Default)]
pub struct DecisionQueue {
    entries: Vec<Entry>,
}

impl DecisionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.decision.id == id)
    }

    /// Upsert every decision from a fetched page, preserving the status of
    /// entries already present.
    pub fn ingest_page(&mut self, page: DecisionPage) {
        tracing::debug!(count = page.decisions.len(), total = page.total, "ingesting page");
        for decision in page.decisions {
            self.upsert(decision);
        }
    }

    /// Apply a live update, however it was transported.
    pub fn apply_update(&mut self, update: DecisionUpdate) {
        match update {
            DecisionUpdate::Upserted(decision) => {
                tracing::debug!(decision_id = %decision.id, "decision upserted");
                self.upsert(decision);
            }
            DecisionUpdate::Removed { id } => {
                tracing::debug!(decision_id = %id, "decision removed upstream");
                if let Some(idx) = self.find(&id) {
                    self.entries.remove(idx);
                }
            }
        }
    }

    /// New decisions enter as `Pending`; a changed decision keeps its
    /// current status — refreshing the body never interrupts an in-flight
    /// submission or un-defers an entry.
    fn upsert(&mut self, decision: Decision) {
        match self.find(&decision.id) {
            Some(idx) => self.entries[idx].decision = decision,
            None => self.entries.push(Entry {
                decision,
                status: DecisionStatus::Pending,
            }),
        }
    }

    /// Put a pending decision aside for later.
    pub fn defer(&mut self, id: &str) -> Result<(), QueueError> {
        let idx = self
            .find(id)
            .ok_or_else(|| QueueError::UnknownDecision(id.to_string()))?;
        match self.entries[idx].status {
            DecisionStatus::Resolving => Err(QueueError::InFlight(id.to_string())),
            _ => {
                self.entries[idx].status = DecisionStatus::Deferred;
                Ok(())
            }
        }
    }

    /// Bring a deferred decision back to pending.
    pub fn restore(&mut self, id: &str) -> Result<(), QueueError> {
        let idx = self
            .find(id)
            .ok_or_else(|| QueueError::UnknownDecision(id.to_string()))?;
        match self.entries[idx].status {
            DecisionStatus::Resolving => Err(QueueError::InFlight(id.to_string())),
            _ => {
                self.entries[idx].status = DecisionStatus::Pending;
                Ok(())
            }
        }
    }

    /// Decisions awaiting display, in arrival order.
    pub fn pending(&self) -> Vec<&Decision> {
        self.entries
            .iter()
            .filter(|e| e.status == DecisionStatus::Pending)
            .map(|e| &e.decision)
            .collect()
    }

    /// Decisions the user has put aside, in arrival order.
    pub fn deferred(&self) -> Vec<&Decision> {
        self.entries
            .iter()
            .filter(|e| e.status == DecisionStatus::Deferred)
            .map(|e| &e.decision)
            .collect()
    }

    pub fn status_of(&self, id: &str) -> Option<DecisionStatus> {
        self.find(id).map(|idx| self.entries[idx].status)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the form and mark the decision `Resolving`, returning the
    /// payload to send. Fails before any network involvement when the form
    /// is invalid, the type is unsupported, or a submission is already in
    /// flight for this decision; the decision stays `Pending` in every
    /// failure case.
    pub fn begin_submission(
        &mut self,
        id: &str,
        form: FormState,
    ) -> Result<Resolution, QueueError> {
        let idx = self
            .find(id)
            .ok_or_else(|| QueueError::UnknownDecision(id.to_string()))?;
        if self.entries[idx].status == DecisionStatus::Resolving {
            return Err(QueueError::InFlight(id.to_string()));
        }
        let resolution = build_resolution(&self.entries[idx].decision, form)?;
        self.entries[idx].status = DecisionStatus::Resolving;
        tracing::info!(decision_id = %id, decision_type = resolution.decision_type(), "submission started");
        Ok(resolution)
    }

    /// Apply the backend's response to an in-flight submission. Success
    /// removes the decision; failure returns it to `Pending` and surfaces
    /// the backend's code and message for display and manual retry. A
    /// response for a decision that was removed meanwhile is tolerated
    /// silently.
    pub fn complete_submission(
        &mut self,
        id: &str,
        outcome: Result<(), crate::backend::BackendError>,
    ) -> Result<(), QueueError> {
        let Some(idx) = self.find(id) else {
            tracing::debug!(decision_id = %id, "submission response for a departed decision");
            return Ok(());
        };
        match outcome {
            Ok(()) => {
                self.entries.remove(idx);
                tracing::info!(decision_id = %id, "resolution accepted");
                Ok(())
            }
            Err(err) => {
                self.entries[idx].status = DecisionStatus::Pending;
                tracing::warn!(decision_id = %id, code = %err.code, "resolution rejected");
                Err(QueueError::Submission(err))
            }
        }
    }

    /// The full fire-and-wait resolve path against a backend. No automatic
    /// retry: a failure leaves the decision pending for the user to retry.
    pub fn submit(
        &mut self,
        id: &str,
        form: FormState,
        backend: &impl DecisionBackend,
    ) -> Result<(), QueueError> {
        let resolution = self.begin_submission(id, form)?;
        let outcome = backend.submit_resolution(id, &resolution);
        self.complete_submission(id, outcome)
    }
}
