//! Route definitions for the catalog resources and seeding.

use axum::routing::get;
use axum::Router;

use crate::handlers::{catalog, seed};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/packing-items", get(catalog::list_packing_items))
        .route("/trip-types", get(catalog::list_trip_types))
        .route("/seed", get(seed::seed))
}
