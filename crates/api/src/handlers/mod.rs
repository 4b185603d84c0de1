//! Request handlers.
//!
//! Handlers delegate to the repositories in `packlist_db` and to the
//! reconciler in `packlist_core`, mapping failures via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod catalog;
pub mod checklist;
pub mod seed;
