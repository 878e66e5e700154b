//! Pick entity model and DTOs.

use draftroom_core::draft_board::PickPositions;
use draftroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A pick row from the `picks` table.
///
/// The `*_name` columns are denormalized copies of `franchises.name`, written
/// only by ownership-changing operations and always from the franchise row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pick {
    pub id: DbId,
    pub season: i32,
    pub round: i32,
    pub position_in_round: Option<i32>,
    pub position_overall: Option<i32>,
    pub prospect_id: Option<DbId>,
    pub owner_id: DbId,
    pub owner_name: String,
    pub last_owner_id: DbId,
    pub last_owner_name: String,
    pub origin_id: DbId,
    pub origin_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert parameters for a freshly generated pick.
///
/// A new pick is fully owned by its originator: origin, owner and last owner
/// are all the same franchise, and no prospect is attached.
#[derive(Debug, Clone)]
pub struct NewPick {
    pub season: i32,
    pub round: i32,
    pub positions: PickPositions,
    pub franchise_id: DbId,
    pub franchise_name: String,
}
