//! Checklist reconciler.
//!
//! Pure, synchronous operations on [`Checklist`] values. Handlers fetch
//! and persist; everything here works on in-memory state only, so the
//! full operation set is unit-testable without a database.
//!
//! A saved checklist is the sole source of truth for its trip type: the
//! catalog is consulted only when no persisted document exists, so later
//! catalog changes never reach an already-saved checklist.

use uuid::Uuid;

use crate::checklist::{CatalogEntry, Checklist, ChecklistItem, CUSTOM_CATEGORY, DEFAULT_CATEGORY};
use crate::types::{DbId, UserId};

/// How a checklist mutation should be persisted.
///
/// Decided purely by whether the checklist has ever been saved, never
/// by re-checking storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDisposition {
    /// First save: insert a new document.
    Create,
    /// Subsequent saves: replace the items of the existing document.
    Update(DbId),
}

impl Checklist {
    /// Build the unsaved checklist shown when no document has been
    /// persisted for this trip type: exactly the catalog's items,
    /// all unpacked, each with a fresh item identifier.
    pub fn seeded(
        user_id: UserId,
        trip_type: impl Into<String>,
        catalog: impl IntoIterator<Item = CatalogEntry>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            trip_type: trip_type.into(),
            items: catalog
                .into_iter()
                .map(ChecklistItem::from_catalog)
                .collect(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Flip the pack state of the item with the given identifier.
    ///
    /// Unknown identifiers are a no-op. Returns whether an item matched.
    pub fn toggle(&mut self, item_id: Uuid) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.is_packed = !item.is_packed;
                true
            }
            None => false,
        }
    }

    /// Append a custom item with the given name.
    ///
    /// The name is trimmed; blank or whitespace-only names are a no-op
    /// (not an error) and return `None`. The new item is unpacked,
    /// non-essential, categorized as Custom, and applies only to this
    /// checklist's trip type.
    pub fn add_item(&mut self, name: &str) -> Option<&ChecklistItem> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.items.push(ChecklistItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: CUSTOM_CATEGORY.to_string(),
            trip_types: vec![self.trip_type.clone()],
            is_essential: false,
            is_packed: false,
        });
        self.items.last()
    }

    /// Remove an item in memory.
    ///
    /// Used for checklists that have never been persisted, where
    /// removal must not touch the store. Removing an identifier that
    /// is not present leaves the items unchanged.
    pub fn remove_item_local(&mut self, item_id: Uuid) {
        self.items.retain(|item| item.id != item_id);
    }

    /// Decide whether the next save inserts a new document or updates
    /// the existing one.
    pub fn save_disposition(&self) -> SaveDisposition {
        match self.id {
            Some(id) => SaveDisposition::Update(id),
            None => SaveDisposition::Create,
        }
    }

    /// Group items by category for display.
    ///
    /// Categories appear in order of first appearance; items keep their
    /// insertion order within a group. Items with an empty category
    /// fall under [`DEFAULT_CATEGORY`].
    pub fn group_by_category(&self) -> Vec<(&str, Vec<&ChecklistItem>)> {
        let mut groups: Vec<(&str, Vec<&ChecklistItem>)> = Vec::new();

        for item in &self.items {
            let category = if item.category.is_empty() {
                DEFAULT_CATEGORY
            } else {
                item.category.as_str()
            };

            match groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, items)) => items.push(item),
                None => groups.push((category, vec![item])),
            }
        }

        groups
    }
}
