//! Draft and undraft: link or unlink exactly one prospect and one pick.
//!
//! The pick side (`picks.prospect_id`) is authoritative for "is this pick
//! used" and the prospect side (`prospects.pick_id`) for "is this prospect
//! drafted". Both are checked before either is written, and both are written
//! in the same transaction.

use draftroom_core::error::CoreError;
use draftroom_core::identifier::{parse_id, IdKind};
use draftroom_core::types::DbId;
use draftroom_db::models::pick::Pick;
use draftroom_db::models::prospect::Prospect;
use draftroom_db::repositories::{FranchiseRepo, LeagueRepo, PickRepo, ProspectRepo};
use draftroom_db::DbPool;
use serde::{Deserialize, Serialize};
use sqlx::PgConnection;

use crate::error::AppResult;

/// Raw `Draft` request.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftRequest {
    pub pick_id: String,
    pub prospect_id: String,
    pub franchise_id: String,
    pub league_id: String,
}

/// Raw `Undraft` request.
#[derive(Debug, Clone, Deserialize)]
pub struct UndraftRequest {
    pub pick_id: String,
    pub prospect_id: String,
}

/// Both rows after a draft or undraft committed.
#[derive(Debug, Serialize)]
pub struct DraftOutcome {
    pub pick: Pick,
    pub prospect: Prospect,
}

/// Assign a prospect to a pick and roster them with the drafting franchise.
pub async fn draft(pool: &DbPool, request: &DraftRequest) -> AppResult<DraftOutcome> {
    let pick_id = parse_id(IdKind::Pick, &request.pick_id)?;
    let prospect_id = parse_id(IdKind::Prospect, &request.prospect_id)?;
    let franchise_id = parse_id(IdKind::Franchise, &request.franchise_id)?;
    let league_id = parse_id(IdKind::League, &request.league_id)?;

    let mut tx = pool.begin().await?;

    let pick = lock_pick(&mut *tx, pick_id).await?;
    if let Some(assigned) = pick.prospect_id {
        return Err(CoreError::Conflict(format!(
            "pick {pick_id} is already assigned to prospect {assigned}"
        ))
        .into());
    }

    let prospect = lock_prospect(&mut *tx, prospect_id).await?;
    if let Some(drafted_with) = prospect.pick_id {
        return Err(CoreError::Conflict(format!(
            "prospect {prospect_id} is already assigned to pick {drafted_with}"
        ))
        .into());
    }

    check_roster_target(&mut *tx, franchise_id, league_id).await?;

    let prospect = ProspectRepo::assign(&mut *tx, prospect_id, league_id, franchise_id, pick_id)
        .await?
        .ok_or_else(|| vanished("prospect", prospect_id))?;
    let pick = PickRepo::set_prospect(&mut *tx, pick_id, Some(prospect_id))
        .await?
        .ok_or_else(|| vanished("pick", pick_id))?;

    tx.commit().await?;

    tracing::info!(
        pick_id = %pick_id,
        prospect_id = %prospect_id,
        franchise_id = %franchise_id,
        "Prospect drafted",
    );
    Ok(DraftOutcome { pick, prospect })
}

/// Remove the link between a pick and the prospect it was used on.
///
/// Both directions must agree. A one-sided link is reported as a conflict
/// and left as it is.
pub async fn undraft(pool: &DbPool, request: &UndraftRequest) -> AppResult<DraftOutcome> {
    let pick_id = parse_id(IdKind::Pick, &request.pick_id)?;
    let prospect_id = parse_id(IdKind::Prospect, &request.prospect_id)?;

    let mut tx = pool.begin().await?;

    let pick = lock_pick(&mut *tx, pick_id).await?;
    match pick.prospect_id {
        None => {
            return Err(CoreError::Conflict(format!(
                "nothing to undraft: pick {pick_id} has no prospect assigned"
            ))
            .into());
        }
        Some(assigned) if assigned != prospect_id => {
            return Err(CoreError::Conflict(format!(
                "mismatched link: pick {pick_id} is assigned to prospect {assigned}, not {prospect_id}"
            ))
            .into());
        }
        Some(_) => {}
    }

    let prospect = lock_prospect(&mut *tx, prospect_id).await?;
    match prospect.pick_id {
        None => {
            return Err(CoreError::Conflict(format!(
                "nothing to undraft: prospect {prospect_id} has no pick assigned"
            ))
            .into());
        }
        Some(drafted_with) if drafted_with != pick_id => {
            return Err(CoreError::Conflict(format!(
                "mismatched link: prospect {prospect_id} was drafted with pick {drafted_with}, not {pick_id}"
            ))
            .into());
        }
        Some(_) => {}
    }

    let prospect = ProspectRepo::release(&mut *tx, prospect_id)
        .await?
        .ok_or_else(|| vanished("prospect", prospect_id))?;
    let pick = PickRepo::set_prospect(&mut *tx, pick_id, None)
        .await?
        .ok_or_else(|| vanished("pick", pick_id))?;

    tx.commit().await?;

    tracing::info!(pick_id = %pick_id, prospect_id = %prospect_id, "Prospect undrafted");
    Ok(DraftOutcome { pick, prospect })
}

async fn lock_pick(conn: &mut PgConnection, id: DbId) -> AppResult<Pick> {
    let pick = PickRepo::find_by_id_for_update(conn, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Pick", id })?;
    Ok(pick)
}

async fn lock_prospect(conn: &mut PgConnection, id: DbId) -> AppResult<Prospect> {
    let prospect = ProspectRepo::find_by_id_for_update(conn, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Prospect",
            id,
        })?;
    Ok(prospect)
}

/// The drafting franchise must exist, play in the given league and have room
/// on its roster.
async fn check_roster_target(
    conn: &mut PgConnection,
    franchise_id: DbId,
    league_id: DbId,
) -> AppResult<()> {
    let franchise = FranchiseRepo::find_by_id(&mut *conn, franchise_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Franchise",
            id: franchise_id,
        })?;
    let league = LeagueRepo::find_by_id(&mut *conn, league_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "League",
            id: league_id,
        })?;
    if franchise.league_id != league.id {
        return Err(CoreError::Conflict(format!(
            "franchise {franchise_id} does not belong to league {league_id}"
        ))
        .into());
    }

    let rostered = ProspectRepo::count_by_franchise(&mut *conn, franchise_id).await?;
    if rostered >= i64::from(league.max_prospects) {
        return Err(CoreError::Conflict(format!(
            "franchise {franchise_id} already has the maximum of {} prospects",
            league.max_prospects
        ))
        .into());
    }
    Ok(())
}

/// A row locked earlier in the same transaction could not be updated.
pub(crate) fn vanished(entity: &str, id: DbId) -> CoreError {
    CoreError::Internal(format!("locked {entity} {id} disappeared during update"))
}
