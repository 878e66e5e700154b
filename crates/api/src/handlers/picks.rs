//! Handlers for the pick board: generation and season listing.

use axum::extract::{Path, State};
use draftroom_core::draft_board::BoardEntry;
use draftroom_db::models::pick::Pick;
use draftroom_db::repositories::PickRepo;
use serde::Deserialize;

use crate::engine::{self, BoardSummary};
use crate::error::AppResult;
use crate::extract::{ValidJson, ValidQuery};
use crate::query::SeasonParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `GenerateOrUpdatePicks`.
#[derive(Debug, Deserialize)]
pub struct GeneratePicksRequest {
    pub picks: Vec<BoardEntry>,
}

/// POST /api/v1/leagues/{league_id}/picks
///
/// Create or renumber every pick of the listed franchise-seasons.
pub async fn generate_or_update(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
    ValidJson(body): ValidJson<GeneratePicksRequest>,
) -> AppResult<DataResponse<BoardSummary>> {
    let summary = engine::generate_or_update_picks(&state.pool, &league_id, &body.picks).await?;
    Ok(DataResponse::created(summary))
}

/// GET /api/v1/picks?season=2025
///
/// List every pick of a draft season in draft order.
pub async fn list_by_season(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SeasonParams>,
) -> AppResult<DataResponse<Vec<Pick>>> {
    let picks = PickRepo::list_by_season(&state.pool, params.season).await?;
    Ok(DataResponse::ok(picks))
}
