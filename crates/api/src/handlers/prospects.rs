//! Bulk prospect import.

use axum::extract::State;
use draftroom_core::error::CoreError;
use draftroom_core::types::DbId;
use draftroom_db::models::prospect::CreateProspect;
use draftroom_db::repositories::ProspectRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /prospects/bulk`.
#[derive(Debug, Deserialize)]
pub struct BulkProspectsRequest {
    pub prospects: Vec<CreateProspect>,
}

/// Ids of newly created prospects and how many entries were already known.
#[derive(Debug, Serialize)]
pub struct BulkProspectsResult {
    pub created: Vec<DbId>,
    pub skipped: usize,
}

/// POST /api/v1/prospects/bulk
///
/// Import prospects, skipping any already present by name, birthdate, NHL
/// draft year and NHL overall pick. The import is all-or-nothing.
pub async fn create_bulk(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<BulkProspectsRequest>,
) -> AppResult<DataResponse<BulkProspectsResult>> {
    for (idx, input) in body.prospects.iter().enumerate() {
        input.validate().map_err(|e| {
            CoreError::Validation(format!("prospect #{idx} ({:?}): {e}", input.full_name))
        })?;
    }

    let mut tx = state.pool.begin().await?;
    let mut result = BulkProspectsResult {
        created: Vec::new(),
        skipped: 0,
    };

    for input in &body.prospects {
        if ProspectRepo::find_by_identity(&mut *tx, input).await?.is_some() {
            result.skipped += 1;
            continue;
        }
        let prospect = ProspectRepo::create(&mut *tx, input).await?;
        result.created.push(prospect.id);
    }

    tx.commit().await?;

    tracing::info!(
        created = result.created.len(),
        skipped = result.skipped,
        "Prospects imported",
    );
    Ok(DataResponse::created(result))
}
