//! Handler for pick and prospect trades.

use axum::extract::State;
use draftroom_core::trade::TradeRequest;

use crate::engine::{self, TradeOutcome};
use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/trades
///
/// Everything franchise A offers moves to franchise B and vice versa, or
/// nothing moves at all.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<TradeRequest>,
) -> AppResult<DataResponse<TradeOutcome>> {
    let outcome = engine::trade(&state.pool, &body).await?;
    Ok(DataResponse::ok(outcome))
}
