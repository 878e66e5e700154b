//! Trade: swap sets of picks and prospects between two franchises.

use std::collections::HashMap;

use draftroom_core::error::CoreError;
use draftroom_core::trade::{TradePlan, TradeRequest};
use draftroom_core::types::DbId;
use draftroom_db::models::franchise::Franchise;
use draftroom_db::models::pick::Pick;
use draftroom_db::models::prospect::Prospect;
use draftroom_db::repositories::{FranchiseRepo, LeagueRepo, PickRepo, ProspectRepo};
use draftroom_db::DbPool;
use serde::Serialize;
use sqlx::PgConnection;

use crate::engine::draft::vanished;
use crate::error::AppResult;

/// Rows changed by a committed trade, plus the ids that were skipped
/// because they no longer exist.
#[derive(Debug, Serialize)]
pub struct TradeOutcome {
    pub picks: Vec<Pick>,
    pub prospects: Vec<Prospect>,
    pub skipped_picks: Vec<DbId>,
    pub skipped_prospects: Vec<DbId>,
}

/// Execute a trade as a single all-or-nothing transaction.
///
/// Every pick and prospect must currently belong to the franchise offering
/// it. Pick ownership moves with the previous owner recorded as last owner;
/// prospects only change franchise and keep the pick that drafted them.
/// Ids that parse but match no row are logged and skipped.
pub async fn trade(pool: &DbPool, request: &TradeRequest) -> AppResult<TradeOutcome> {
    let plan = TradePlan::parse(request)?;

    let mut tx = pool.begin().await?;

    let franchise_a = load_franchise(&mut *tx, plan.franchise_a).await?;
    let franchise_b = load_franchise(&mut *tx, plan.franchise_b).await?;
    if franchise_a.league_id != franchise_b.league_id {
        return Err(CoreError::Conflict(format!(
            "franchises {} and {} play in different leagues",
            franchise_a.id, franchise_b.id
        ))
        .into());
    }
    let franchises: HashMap<DbId, &Franchise> =
        [(franchise_a.id, &franchise_a), (franchise_b.id, &franchise_b)].into();

    let mut outcome = TradeOutcome {
        picks: Vec::with_capacity(plan.pick_moves().len()),
        prospects: Vec::with_capacity(plan.prospect_moves().len()),
        skipped_picks: Vec::new(),
        skipped_prospects: Vec::new(),
    };

    for mv in plan.pick_moves() {
        let Some(pick) = PickRepo::find_by_id_for_update(&mut *tx, mv.asset_id).await? else {
            tracing::warn!(pick_id = %mv.asset_id, "Skipping unknown pick in trade");
            outcome.skipped_picks.push(mv.asset_id);
            continue;
        };
        let from = franchises[&mv.from];
        let to = franchises[&mv.to];
        if pick.owner_id != from.id {
            return Err(CoreError::Conflict(format!(
                "pick {} is owned by {} ({}), not by {} ({})",
                pick.id, pick.owner_name, pick.owner_id, from.name, from.id
            ))
            .into());
        }
        let pick = PickRepo::transfer(&mut *tx, pick.id, from, to)
            .await?
            .ok_or_else(|| vanished("pick", mv.asset_id))?;
        outcome.picks.push(pick);
    }

    // Net prospects received per franchise, for the roster cap check.
    let mut received: HashMap<DbId, i64> = HashMap::new();

    for mv in plan.prospect_moves() {
        let Some(prospect) = ProspectRepo::find_by_id_for_update(&mut *tx, mv.asset_id).await?
        else {
            tracing::warn!(prospect_id = %mv.asset_id, "Skipping unknown prospect in trade");
            outcome.skipped_prospects.push(mv.asset_id);
            continue;
        };
        if prospect.franchise_id != Some(mv.from) {
            return Err(CoreError::Conflict(format!(
                "prospect {} is not rostered by franchise {}",
                prospect.id, mv.from
            ))
            .into());
        }
        let prospect = ProspectRepo::set_franchise(&mut *tx, prospect.id, mv.to)
            .await?
            .ok_or_else(|| vanished("prospect", mv.asset_id))?;
        *received.entry(mv.to).or_default() += 1;
        *received.entry(mv.from).or_default() -= 1;
        outcome.prospects.push(prospect);
    }

    check_roster_caps(&mut *tx, franchise_a.league_id, &received).await?;

    tx.commit().await?;

    tracing::info!(
        franchise_a = %franchise_a.id,
        franchise_b = %franchise_b.id,
        picks = outcome.picks.len(),
        prospects = outcome.prospects.len(),
        skipped = outcome.skipped_picks.len() + outcome.skipped_prospects.len(),
        "Trade committed",
    );
    Ok(outcome)
}

async fn load_franchise(conn: &mut PgConnection, id: DbId) -> AppResult<Franchise> {
    let franchise = FranchiseRepo::find_by_id(conn, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Franchise",
            id,
        })?;
    Ok(franchise)
}

/// A franchise that gains prospects in a trade must not end up above the
/// league's roster cap. Franchises that only shed prospects are not checked.
async fn check_roster_caps(
    conn: &mut PgConnection,
    league_id: DbId,
    received: &HashMap<DbId, i64>,
) -> AppResult<()> {
    if received.values().all(|&net| net <= 0) {
        return Ok(());
    }
    let league = LeagueRepo::find_by_id(&mut *conn, league_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "League",
            id: league_id,
        })?;

    for (&franchise_id, &net) in received {
        if net <= 0 {
            continue;
        }
        let rostered = ProspectRepo::count_by_franchise(&mut *conn, franchise_id).await?;
        if rostered > i64::from(league.max_prospects) {
            return Err(CoreError::Conflict(format!(
                "franchise {franchise_id} would roster {rostered} prospects, above the maximum of {}",
                league.max_prospects
            ))
            .into());
        }
    }
    Ok(())
}
