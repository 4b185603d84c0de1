//! Handlers for the read-only catalog resources.
//!
//! Both endpoints return bare JSON arrays, matching what the
//! presentation layer already consumes.

use axum::extract::{Query, State};
use axum::Json;
use packlist_db::models::packing_item::PackingItem;
use packlist_db::models::trip_type::TripType;
use packlist_db::repositories::{PackingItemRepo, TripTypeRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingItemsQuery {
    pub trip_type: Option<String>,
}

/// GET /api/packing-items?tripType=
///
/// All catalog items, or only those applying to the given trip type.
pub async fn list_packing_items(
    State(state): State<AppState>,
    Query(query): Query<PackingItemsQuery>,
) -> AppResult<Json<Vec<PackingItem>>> {
    let items = PackingItemRepo::list(&state.pool, query.trip_type.as_deref()).await?;
    Ok(Json(items))
}

/// GET /api/trip-types
pub async fn list_trip_types(State(state): State<AppState>) -> AppResult<Json<Vec<TripType>>> {
    let trip_types = TripTypeRepo::list(&state.pool).await?;
    Ok(Json(trip_types))
}
