//! Database entities and request DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus the `Deserialize` DTOs the API
//! accepts for that resource.

pub mod checklist;
pub mod packing_item;
pub mod trip_type;
