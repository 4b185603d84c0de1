use packlist_core::checklist::CatalogEntry;
use packlist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `packing_items` catalog table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingItem {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub trip_types: Vec<String>,
    pub is_essential: bool,
    pub created_at: Timestamp,
}

impl From<PackingItem> for CatalogEntry {
    fn from(item: PackingItem) -> Self {
        CatalogEntry {
            name: item.name,
            category: item.category,
            trip_types: item.trip_types,
            is_essential: item.is_essential,
        }
    }
}
