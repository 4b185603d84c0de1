//! Repository for the `trip_types` catalog table.

use sqlx::PgPool;

use crate::models::trip_type::TripType;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, icon, created_at";

/// Provides read operations for trip types.
pub struct TripTypeRepo;

impl TripTypeRepo {
    /// List the full trip-type catalog, seed order preserved.
    pub async fn list(pool: &PgPool) -> Result<Vec<TripType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trip_types ORDER BY id ASC");
        sqlx::query_as::<_, TripType>(&query).fetch_all(pool).await
    }
}
