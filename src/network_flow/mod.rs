//! Maximum flow on dense capacity matrices.

pub mod capacity;
pub mod edmonds_karp;
pub mod error;
pub mod min_cut;
pub mod verify;

pub use capacity::Capacity;
pub use edmonds_karp::{compute_max_flow, max_flow, validate, AugmentingPath, MaxFlow};
pub use error::{FlowError, FlowErrorKind};
pub use min_cut::MinCut;
pub use verify::{verify_flow, FlowViolation};
