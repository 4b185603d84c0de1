//! Handlers for the `/checklist` resource.
//!
//! The GET handler realizes the reconciler's load semantics: a
//! persisted checklist is returned verbatim (it is the sole source of
//! truth once saved and never re-merges with the catalog), and an
//! unsaved one is seeded from the catalog on the fly.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use packlist_core::checklist::Checklist;
use packlist_core::error::CoreError;
use packlist_core::types::DbId;
use packlist_db::models::checklist::{normalize_items, CreateChecklist, UpdateChecklist};
use packlist_db::repositories::{ChecklistRepo, PackingItemRepo};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistQuery {
    pub trip_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub checklist: Checklist,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub success: bool,
    pub checklist_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// GET /api/checklist?tripType=
///
/// 400 when `tripType` is missing or blank. An unsaved checklist is
/// returned with a null id and all items unpacked.
pub async fn get_checklist(
    State(state): State<AppState>,
    Query(query): Query<ChecklistQuery>,
) -> AppResult<Json<ChecklistResponse>> {
    let trip_type = query
        .trip_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("tripType is required".to_string()))?;
    let user = state.config.default_user.clone();

    let checklist = match ChecklistRepo::find_by_trip_type(&state.pool, &user, &trip_type).await? {
        Some(row) => row.into_checklist(),
        None => {
            let catalog = PackingItemRepo::list(&state.pool, Some(&trip_type)).await?;
            Checklist::seeded(user, trip_type, catalog.into_iter().map(Into::into))
        }
    };

    Ok(Json(ChecklistResponse { checklist }))
}

/// POST /api/checklist
///
/// First save of an unsaved checklist. Items without an identifier get
/// one assigned before the insert. A second create for the same trip
/// type hits the compound unique key and surfaces as 409.
pub async fn create_checklist(
    State(state): State<AppState>,
    Json(input): Json<CreateChecklist>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let user = state.config.default_user.clone();
    let items = normalize_items(input.items);

    let row = ChecklistRepo::insert(&state.pool, &user, &input.trip_type, &items).await?;

    tracing::info!(
        checklist_id = row.id,
        trip_type = %row.trip_type,
        items = row.items.0.len(),
        "Checklist created",
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            checklist_id: row.id,
        }),
    ))
}

/// PUT /api/checklist
///
/// Replaces the full item list of an existing checklist. `createdAt`
/// is untouched; `updatedAt` advances.
pub async fn update_checklist(
    State(state): State<AppState>,
    Json(input): Json<UpdateChecklist>,
) -> AppResult<Json<SuccessResponse>> {
    let user = state.config.default_user.clone();
    let items = normalize_items(input.items);

    ChecklistRepo::replace_items(&state.pool, &user, input.checklist_id, &items)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Checklist",
            id: input.checklist_id,
        }))?;

    Ok(Json(SuccessResponse { success: true }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemQuery {
    pub item_id: Option<Uuid>,
    pub checklist_id: Option<DbId>,
}

/// DELETE /api/checklist?itemId=&checklistId=
///
/// Removes one item from a persisted checklist. Removal of an item id
/// that is not on the checklist still succeeds (the filter removes
/// nothing). 400 when either parameter is missing, 404 when the
/// checklist does not resolve.
pub async fn delete_item(
    State(state): State<AppState>,
    Query(query): Query<DeleteItemQuery>,
) -> AppResult<Json<SuccessResponse>> {
    let (Some(item_id), Some(checklist_id)) = (query.item_id, query.checklist_id) else {
        return Err(AppError::BadRequest(
            "Missing required parameters: itemId and checklistId".to_string(),
        ));
    };
    let user = state.config.default_user.clone();

    let updated = ChecklistRepo::remove_item(&state.pool, &user, checklist_id, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Checklist",
            id: checklist_id,
        }))?;

    tracing::info!(
        checklist_id,
        %item_id,
        remaining = updated.items.0.len(),
        "Checklist item removed",
    );

    Ok(Json(SuccessResponse { success: true }))
}
