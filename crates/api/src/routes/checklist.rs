//! Route definitions for the `/checklist` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::checklist;
use crate::state::AppState;

/// All four checklist verbs share a single path; the document to act
/// on is addressed by query or body parameters, not the URL.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/checklist",
        get(checklist::get_checklist)
            .post(checklist::create_checklist)
            .put(checklist::update_checklist)
            .delete(checklist::delete_item),
    )
}
