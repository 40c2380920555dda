//! The pending-decision queue and its backend contract: paginated fetch,
//! transport-agnostic live updates, and the fire-and-wait resolve path
//! with client-side validation and an at-most-one-in-flight-per-decision
//! guard. Single-threaded by design; callers drive it from their event
//! loop.

pub mod backend;
pub mod error;
pub mod queue;

pub use backend::{BackendError, DecisionBackend, DecisionPage, DecisionUpdate, PageRequest};
pub use error::QueueError;
pub use queue::{DecisionQueue, DecisionStatus};
