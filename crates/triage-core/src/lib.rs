//! Core decision model for a human-in-the-loop triage queue: typed
//! decision data, the decision type registry, validated resolution payload
//! builders, and checkpoint countdown evaluation. Pure — no I/O, no
//! clocks, no global state.

pub mod builder;
pub mod decision;
pub mod error;
pub mod expiry;
pub mod registry;
pub mod resolution;

pub use builder::{ApprovalForm, CategorizeForm, ConflictForm, FormState};
pub use decision::{Decision, DecisionData, DecisionKind};
pub use error::DecisionError;
pub use registry::{build_resolution, config_for, Capabilities, TypeConfig};
pub use resolution::{ConflictChoice, Resolution};
