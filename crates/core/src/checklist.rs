//! Checklist domain values.
//!
//! Wire names are camelCase to match the JSON the presentation layer
//! already speaks (`tripType`, `isPacked`, ...).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{DbId, Timestamp, UserId};

/// Category assigned to user-created items.
pub const CUSTOM_CATEGORY: &str = "Custom";

/// Fallback category for items that never declared one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A catalog packing item as the reconciler sees it.
///
/// Deliberately decoupled from the database row so the reconciler
/// stays free of persistence concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    pub trip_types: Vec<String>,
    pub is_essential: bool,
}

/// One entry on a user's checklist: a packing item plus pack state.
///
/// Every item carries a mandatory identifier assigned at item-creation
/// time; item identity never falls back to the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub trip_types: Vec<String>,
    pub is_essential: bool,
    pub is_packed: bool,
}

impl ChecklistItem {
    /// Build an unpacked checklist item from a catalog entry, assigning
    /// a fresh identifier.
    pub fn from_catalog(entry: CatalogEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: entry.name,
            category: entry.category,
            trip_types: entry.trip_types,
            is_essential: entry.is_essential,
            is_packed: false,
        }
    }
}

/// The per-(user, trip type) checklist.
///
/// `id` is `None` until the checklist is first persisted; the
/// create-vs-update decision is made purely on its presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: Option<DbId>,
    pub user_id: UserId,
    pub trip_type: String,
    pub items: Vec<ChecklistItem>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Checklist {
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
