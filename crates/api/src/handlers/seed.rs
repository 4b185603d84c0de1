//! Handler for the idempotent catalog seeding endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: &'static str,
}

/// GET /api/seed
///
/// Populates the catalog on first call; every later call is a no-op.
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let outcome = packlist_db::seed::ensure_seeded(&state.pool).await?;

    let message = if outcome.already_seeded() {
        "Database already seeded"
    } else {
        "Database seeded successfully"
    };

    Ok(Json(SeedResponse {
        success: true,
        message,
    }))
}
