//! Read accessors scoped to one franchise.

use axum::extract::{Path, State};
use draftroom_core::error::CoreError;
use draftroom_core::identifier::{parse_id, IdKind};
use draftroom_core::types::DbId;
use draftroom_db::models::pick::Pick;
use draftroom_db::models::prospect::Prospect;
use draftroom_db::repositories::{FranchiseRepo, PickRepo, ProspectRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/franchises/{id}/picks
///
/// Picks the franchise currently owns, across seasons.
pub async fn list_picks(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<DataResponse<Vec<Pick>>> {
    let id = ensure_franchise(&state, &raw_id).await?;
    let picks = PickRepo::list_by_owner(&state.pool, id).await?;
    Ok(DataResponse::ok(picks))
}

/// GET /api/v1/franchises/{id}/prospects
///
/// Prospects currently rostered by the franchise.
pub async fn list_prospects(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<DataResponse<Vec<Prospect>>> {
    let id = ensure_franchise(&state, &raw_id).await?;
    let prospects = ProspectRepo::list_by_franchise(&state.pool, id).await?;
    Ok(DataResponse::ok(prospects))
}

async fn ensure_franchise(state: &AppState, raw_id: &str) -> AppResult<DbId> {
    let id = parse_id(IdKind::Franchise, raw_id)?;
    FranchiseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Franchise",
            id,
        })?;
    Ok(id)
}
