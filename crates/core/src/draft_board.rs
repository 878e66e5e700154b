//! Draft board numbering.
//!
//! Picks are numbered round-major, franchise-minor: the franchise holding
//! lottery position `p` picks `p`-th in every round, and its overall number
//! in round `r` is `p + (r - 1) * N` where `N` is the league's franchise
//! count at generation time. A lottery position of `0` means the lottery has
//! not been run for that slot yet and both position fields stay empty.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::identifier::{parse_id, IdKind};
use crate::types::DbId;

/// Sentinel lottery position meaning "not yet drawn".
pub const LOTTERY_NOT_RUN: i32 = 0;

/// One franchise-season row of a `GenerateOrUpdatePicks` request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BoardEntry {
    pub franchise_id: String,
    /// Informational only; pick display names always come from the
    /// franchise record.
    #[serde(default)]
    pub franchise_name: String,
    #[validate(range(min = 1, max = 9999))]
    pub season: i32,
    #[validate(range(min = 0))]
    pub lottery_position: i32,
}

/// A [`BoardEntry`] whose identifier has been parsed and whose numbers have
/// been checked against the league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBoardEntry {
    pub franchise_id: DbId,
    pub franchise_name: String,
    pub season: i32,
    pub lottery_position: i32,
}

/// Position fields computed for one pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickPositions {
    pub in_round: Option<i32>,
    pub overall: Option<i32>,
}

/// Compute the in-round and overall position of the pick a franchise owns in
/// `round` (1-based).
pub fn pick_positions(lottery_position: i32, round: i32, franchise_count: i32) -> PickPositions {
    if lottery_position == LOTTERY_NOT_RUN {
        return PickPositions {
            in_round: None,
            overall: None,
        };
    }
    PickPositions {
        in_round: Some(lottery_position),
        overall: Some(lottery_position + (round - 1) * franchise_count),
    }
}

/// The rounds a league drafts, `1..=draft_rounds`.
pub fn rounds(draft_rounds: i32) -> RangeInclusive<i32> {
    1..=draft_rounds
}

/// Validate and parse a whole board request before the store is touched.
///
/// Rejects malformed franchise ids, out-of-range seasons, lottery positions
/// beyond the league's franchise count, and the same franchise appearing
/// twice for one season.
pub fn parse_entries(
    entries: &[BoardEntry],
    franchise_count: i32,
) -> Result<Vec<ParsedBoardEntry>, CoreError> {
    if entries.is_empty() {
        return Err(CoreError::Validation(
            "at least one franchise entry is required".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(entries.len());
    let mut parsed = Vec::with_capacity(entries.len());

    for entry in entries {
        entry
            .validate()
            .map_err(|e| CoreError::from_validation(&e))?;
        let franchise_id = parse_id(IdKind::Franchise, &entry.franchise_id)?;

        if entry.lottery_position > franchise_count {
            return Err(CoreError::Validation(format!(
                "lottery_position {} for franchise {franchise_id} exceeds the league's {franchise_count} franchises",
                entry.lottery_position
            )));
        }
        if !seen.insert((franchise_id, entry.season)) {
            return Err(CoreError::Validation(format!(
                "franchise {franchise_id} is listed more than once for season {}",
                entry.season
            )));
        }

        parsed.push(ParsedBoardEntry {
            franchise_id,
            franchise_name: entry.franchise_name.trim().to_string(),
            season: entry.season,
            lottery_position: entry.lottery_position,
        });
    }

    Ok(parsed)
}
