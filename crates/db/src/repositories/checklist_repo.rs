//! Repository for the `checklists` table.
//!
//! One document per (user, trip type), enforced by the
//! `uq_checklists_user_trip` constraint. The `items` JSONB column is
//! replaced wholesale on update; item removal is a single atomic
//! statement so no read-then-write window exists.

use packlist_core::checklist::ChecklistItem;
use packlist_core::types::{DbId, UserId};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::checklist::UserChecklist;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, trip_type, items, created_at, updated_at";

/// Provides data access for user checklists.
pub struct ChecklistRepo;

impl ChecklistRepo {
    /// Find the checklist for a (user, trip type) pair.
    ///
    /// The unique constraint guarantees at most one row; the ordering
    /// clause only matters for rows predating the constraint and keeps
    /// the original "most recent wins" behaviour for them.
    pub async fn find_by_trip_type(
        pool: &PgPool,
        user: &UserId,
        trip_type: &str,
    ) -> Result<Option<UserChecklist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checklists \
             WHERE user_id = $1 AND trip_type = $2 \
             ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, UserChecklist>(&query)
            .bind(user.as_str())
            .bind(trip_type)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a checklist by identifier, scoped to its owner.
    pub async fn fetch_by_id(
        pool: &PgPool,
        user: &UserId,
        id: DbId,
    ) -> Result<Option<UserChecklist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM checklists WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, UserChecklist>(&query)
            .bind(id)
            .bind(user.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Insert a new checklist document.
    ///
    /// `created_at` and `updated_at` are both set to now. A second
    /// insert for the same (user, trip type) violates
    /// `uq_checklists_user_trip` and surfaces as a database error the
    /// API boundary maps to 409.
    pub async fn insert(
        pool: &PgPool,
        user: &UserId,
        trip_type: &str,
        items: &[ChecklistItem],
    ) -> Result<UserChecklist, sqlx::Error> {
        let query = format!(
            "INSERT INTO checklists (user_id, trip_type, items) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserChecklist>(&query)
            .bind(user.as_str())
            .bind(trip_type)
            .bind(Json(items))
            .fetch_one(pool)
            .await
    }

    /// Replace the full item list of an existing checklist, advancing
    /// `updated_at` and leaving `created_at` untouched.
    ///
    /// Returns `None` when the identifier does not resolve for this user.
    pub async fn replace_items(
        pool: &PgPool,
        user: &UserId,
        id: DbId,
        items: &[ChecklistItem],
    ) -> Result<Option<UserChecklist>, sqlx::Error> {
        let query = format!(
            "UPDATE checklists \
             SET items = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserChecklist>(&query)
            .bind(id)
            .bind(user.as_str())
            .bind(Json(items))
            .fetch_optional(pool)
            .await
    }

    /// Remove one item from a checklist's JSONB array in a single
    /// atomic UPDATE, so a concurrent save cannot slip between a fetch
    /// and the write. The surviving elements keep their array position
    /// (`WITH ORDINALITY` pins the aggregation order).
    ///
    /// Removing an item id that is not present leaves the items
    /// unchanged and still succeeds. Returns `None` when the checklist
    /// identifier does not resolve for this user.
    pub async fn remove_item(
        pool: &PgPool,
        user: &UserId,
        id: DbId,
        item_id: Uuid,
    ) -> Result<Option<UserChecklist>, sqlx::Error> {
        let query = format!(
            "UPDATE checklists \
             SET items = COALESCE( \
                     (SELECT jsonb_agg(elem ORDER BY ord) \
                      FROM jsonb_array_elements(items) WITH ORDINALITY AS t(elem, ord) \
                      WHERE elem->>'id' IS DISTINCT FROM $3), \
                     '[]'::jsonb), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserChecklist>(&query)
            .bind(id)
            .bind(user.as_str())
            .bind(item_id.to_string())
            .fetch_optional(pool)
            .await
    }
}
