//! Repository for the `packing_items` catalog table.

use sqlx::PgPool;

use crate::models::packing_item::PackingItem;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, trip_types, is_essential, created_at";

/// Provides read operations for catalog packing items.
pub struct PackingItemRepo;

impl PackingItemRepo {
    /// List catalog items, optionally restricted to those applying to
    /// a trip type. Order is stable (seed order) but carries no meaning.
    pub async fn list(
        pool: &PgPool,
        trip_type: Option<&str>,
    ) -> Result<Vec<PackingItem>, sqlx::Error> {
        match trip_type {
            Some(trip_type) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM packing_items \
                     WHERE $1 = ANY(trip_types) ORDER BY id ASC"
                );
                sqlx::query_as::<_, PackingItem>(&query)
                    .bind(trip_type)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM packing_items ORDER BY id ASC");
                sqlx::query_as::<_, PackingItem>(&query).fetch_all(pool).await
            }
        }
    }
}
