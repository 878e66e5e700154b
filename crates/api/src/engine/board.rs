//! Draft board generation: create or renumber every pick a franchise holds
//! for a season.

use draftroom_core::draft_board::{self, BoardEntry, ParsedBoardEntry, PickPositions};
use draftroom_core::error::CoreError;
use draftroom_core::identifier::{parse_id, IdKind};
use draftroom_db::models::franchise::Franchise;
use draftroom_db::models::pick::{NewPick, Pick};
use draftroom_db::repositories::{FranchiseRepo, LeagueRepo, PickRepo};
use draftroom_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Result of a board generation call.
#[derive(Debug, Serialize)]
pub struct BoardSummary {
    pub created: usize,
    pub updated: usize,
    pub picks: Vec<Pick>,
}

/// What a single upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Upsert {
    Created,
    Updated,
}

/// Create or update all picks for the given franchise-season entries.
///
/// The league's round count and franchise count are read once. The whole
/// request is validated and every franchise resolved before the first write.
/// Each pick is then upserted in its own transaction; the first failure
/// stops the call and names the franchise, season and round that failed.
/// Picks written before the failure stay committed.
pub async fn generate_or_update_picks(
    pool: &DbPool,
    league_id: &str,
    entries: &[BoardEntry],
) -> AppResult<BoardSummary> {
    let league_id = parse_id(IdKind::League, league_id)?;

    let league = LeagueRepo::find_by_id(pool, league_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "League",
            id: league_id,
        })?;
    if league.draft_rounds < 1 {
        return Err(CoreError::Conflict(format!(
            "league {league_id} has no draft rounds configured"
        ))
        .into());
    }

    let franchise_count = LeagueRepo::count_franchises(pool, league_id).await?;
    let franchise_count = i32::try_from(franchise_count)
        .map_err(|_| CoreError::Internal(format!("franchise count {franchise_count} overflows")))?;

    let parsed = draft_board::parse_entries(entries, franchise_count)?;

    let mut resolved = Vec::with_capacity(parsed.len());
    for entry in parsed {
        let franchise = resolve_franchise(pool, league_id, &entry).await?;
        resolved.push((entry, franchise));
    }

    let mut summary = BoardSummary {
        created: 0,
        updated: 0,
        picks: Vec::new(),
    };

    for (entry, franchise) in &resolved {
        for round in draft_board::rounds(league.draft_rounds) {
            let positions =
                draft_board::pick_positions(entry.lottery_position, round, franchise_count);
            let (pick, kind) = upsert_pick(pool, franchise, entry.season, round, positions)
                .await
                .map_err(|source| {
                    tracing::error!(
                        franchise_id = %franchise.id,
                        season = entry.season,
                        round,
                        error = %source,
                        "Pick upsert failed, stopping board generation",
                    );
                    AppError::PickUpsert {
                        franchise_id: franchise.id,
                        season: entry.season,
                        round,
                        source: Box::new(source),
                    }
                })?;
            match kind {
                Upsert::Created => summary.created += 1,
                Upsert::Updated => summary.updated += 1,
            }
            summary.picks.push(pick);
        }
    }

    tracing::info!(
        league_id = %league_id,
        franchises = resolved.len(),
        rounds = league.draft_rounds,
        created = summary.created,
        updated = summary.updated,
        "Draft board generated",
    );
    Ok(summary)
}

/// Load the franchise named by an entry and check it plays in the league.
async fn resolve_franchise(
    pool: &DbPool,
    league_id: draftroom_core::types::DbId,
    entry: &ParsedBoardEntry,
) -> AppResult<Franchise> {
    let franchise = FranchiseRepo::find_by_id(pool, entry.franchise_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Franchise",
            id: entry.franchise_id,
        })?;

    if franchise.league_id != league_id {
        return Err(CoreError::Conflict(format!(
            "franchise {} does not belong to league {league_id}",
            franchise.id
        ))
        .into());
    }
    if !entry.franchise_name.is_empty() && entry.franchise_name != franchise.name {
        tracing::warn!(
            franchise_id = %franchise.id,
            given = %entry.franchise_name,
            stored = %franchise.name,
            "Ignoring franchise name from request, using stored name",
        );
    }
    Ok(franchise)
}

/// Upsert the pick keyed by `(origin = franchise, season, round)` atomically.
///
/// A new pick starts fully owned by its originator. An existing pick only
/// has its numbering rewritten, so regenerating never undoes a trade.
async fn upsert_pick(
    pool: &DbPool,
    franchise: &Franchise,
    season: i32,
    round: i32,
    positions: PickPositions,
) -> AppResult<(Pick, Upsert)> {
    let mut tx = pool.begin().await?;

    let mut existing =
        PickRepo::find_by_natural_key_for_update(&mut *tx, franchise.id, season, round).await?;

    let result = match existing.len() {
        0 => {
            let new_pick = NewPick {
                season,
                round,
                positions,
                franchise_id: franchise.id,
                franchise_name: franchise.name.clone(),
            };
            let pick = PickRepo::create(&mut *tx, &new_pick).await?;
            (pick, Upsert::Created)
        }
        1 => {
            let current = existing.remove(0);
            let pick = PickRepo::update_numbering(&mut *tx, current.id, season, round, positions)
                .await?
                .ok_or_else(|| {
                    CoreError::Internal(format!("locked pick {} disappeared", current.id))
                })?;
            (pick, Upsert::Updated)
        }
        n => {
            return Err(CoreError::IntegrityFault(format!(
                "{n} picks exist for origin {}, season {season}, round {round}; expected at most one",
                franchise.id
            ))
            .into());
        }
    };

    tx.commit().await?;
    Ok(result)
}
