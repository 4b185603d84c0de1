use packlist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `trip_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripType {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub created_at: Timestamp,
}
