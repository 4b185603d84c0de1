pub mod catalog;
pub mod checklist;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /checklist?tripType=                  load (persisted or seeded)
/// POST   /checklist                            create
/// PUT    /checklist                            replace items
/// DELETE /checklist?itemId=&checklistId=       remove one item
///
/// GET    /packing-items?tripType=              catalog items
/// GET    /trip-types                           trip-type catalog
/// GET    /seed                                 idempotent catalog seeding
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(checklist::router())
        .merge(catalog::router())
}
