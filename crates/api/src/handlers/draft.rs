//! Handlers for drafting and undrafting prospects.

use axum::extract::State;

use crate::engine::{self, DraftOutcome, DraftRequest, UndraftRequest};
use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/draft
pub async fn draft(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<DraftRequest>,
) -> AppResult<DataResponse<DraftOutcome>> {
    let outcome = engine::draft(&state.pool, &body).await?;
    Ok(DataResponse::ok(outcome))
}

/// POST /api/v1/undraft
pub async fn undraft(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<UndraftRequest>,
) -> AppResult<DataResponse<DraftOutcome>> {
    let outcome = engine::undraft(&state.pool, &body).await?;
    Ok(DataResponse::ok(outcome))
}
