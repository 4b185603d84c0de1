//! Checklist row and request DTOs.

use packlist_core::checklist::{Checklist, ChecklistItem, DEFAULT_CATEGORY};
use packlist_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `checklists` table. Items live in a JSONB column and
/// are always replaced wholesale, preserving the document semantics of
/// the original store.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChecklist {
    pub id: DbId,
    pub user_id: String,
    pub trip_type: String,
    pub items: Json<Vec<ChecklistItem>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserChecklist {
    /// Convert the row into the domain value the reconciler operates on.
    pub fn into_checklist(self) -> Checklist {
        Checklist {
            id: Some(self.id),
            user_id: UserId::new(self.user_id),
            trip_type: self.trip_type,
            items: self.items.0,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}

/// A checklist item as submitted by the client.
///
/// Newly added custom items may not carry an identifier yet; one is
/// assigned during normalization so every stored item has an id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingItem {
    pub id: Option<Uuid>,
    pub name: String,
    pub category: Option<String>,
    #[serde(default)]
    pub trip_types: Vec<String>,
    #[serde(default)]
    pub is_essential: bool,
    #[serde(default)]
    pub is_packed: bool,
}

impl IncomingItem {
    fn into_item(self) -> ChecklistItem {
        ChecklistItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            category: match self.category {
                Some(category) if !category.is_empty() => category,
                _ => DEFAULT_CATEGORY.to_string(),
            },
            trip_types: self.trip_types,
            is_essential: self.is_essential,
            is_packed: self.is_packed,
        }
    }
}

/// Assign identifiers and default categories to client-submitted items.
pub fn normalize_items(items: Vec<IncomingItem>) -> Vec<ChecklistItem> {
    items.into_iter().map(IncomingItem::into_item).collect()
}

/// Body of `POST /api/checklist`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChecklist {
    pub trip_type: String,
    pub items: Vec<IncomingItem>,
}

/// Body of `PUT /api/checklist`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChecklist {
    pub checklist_id: DbId,
    pub items: Vec<IncomingItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incoming(id: Option<Uuid>, category: Option<&str>) -> IncomingItem {
        IncomingItem {
            id,
            name: "Sunscreen".to_string(),
            category: category.map(str::to_string),
            trip_types: vec!["beach".to_string()],
            is_essential: true,
            is_packed: false,
        }
    }

    #[test]
    fn normalize_assigns_id_when_missing() {
        let items = normalize_items(vec![incoming(None, Some("Toiletries"))]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "Toiletries");
    }

    #[test]
    fn normalize_preserves_existing_id() {
        let id = Uuid::new_v4();
        let items = normalize_items(vec![incoming(Some(id), Some("Toiletries"))]);
        assert_eq!(items[0].id, id);
    }

    #[test]
    fn normalize_defaults_missing_category_to_other() {
        let items = normalize_items(vec![incoming(None, None), incoming(None, Some(""))]);
        assert!(items.iter().all(|item| item.category == DEFAULT_CATEGORY));
    }
}
