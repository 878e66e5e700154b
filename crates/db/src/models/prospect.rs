//! Prospect entity model and DTOs.

use draftroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A prospect row from the `prospects` table.
///
/// `franchise_id` is set while the prospect is rostered. `pick_id` is the
/// back-reference to the pick that drafted them and always agrees with that
/// pick's `prospect_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prospect {
    pub id: DbId,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub nhl_team: String,
    pub birthdate: String,
    pub height: String,
    pub weight: String,
    pub nhl_draft_year: String,
    pub nhl_draft_round: String,
    pub nhl_draft_pick_in_round: String,
    pub nhl_draft_pick_overall: String,
    pub position_code: String,
    pub league_id: Option<DbId>,
    pub franchise_id: Option<DbId>,
    pub pick_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a prospect. Missing biographical fields default to empty.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProspect {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nhl_team: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub nhl_draft_year: String,
    #[serde(default)]
    pub nhl_draft_round: String,
    #[serde(default)]
    pub nhl_draft_pick_in_round: String,
    #[serde(default)]
    pub nhl_draft_pick_overall: String,
    #[serde(default)]
    pub position_code: String,
}
