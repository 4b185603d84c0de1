//! Pure domain logic for the packing checklist service.
//!
//! No I/O lives here: the reconciler operates on in-memory checklist
//! values and leaves persistence to callers.

pub mod checklist;
pub mod error;
pub mod reconcile;
pub mod types;
