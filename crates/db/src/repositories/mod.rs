//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Checklist operations also
//! take the owning [`UserId`](packlist_core::types::UserId) explicitly.

pub mod checklist_repo;
pub mod packing_item_repo;
pub mod trip_type_repo;

pub use checklist_repo::ChecklistRepo;
pub use packing_item_repo::PackingItemRepo;
pub use trip_type_repo::TripTypeRepo;
