//! Trade request normalization.
//!
//! A trade moves everything franchise A offers to franchise B and vice
//! versa. Before any row is touched the request is parsed into a
//! [`TradePlan`]: every identifier is validated, the sides are checked to be
//! disjoint, and the individual asset moves are ordered by ascending id so
//! that concurrent trades sharing rows always lock them in the same order.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CoreError;
use crate::identifier::{parse_id, parse_ids, IdKind};
use crate::types::DbId;

/// Raw trade request as received from a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeRequest {
    pub franchise_a_id: String,
    #[serde(default)]
    pub picks_a: Vec<String>,
    #[serde(default)]
    pub prospects_a: Vec<String>,
    pub franchise_b_id: String,
    #[serde(default)]
    pub picks_b: Vec<String>,
    #[serde(default)]
    pub prospects_b: Vec<String>,
}

/// A single asset changing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMove {
    pub asset_id: DbId,
    pub from: DbId,
    pub to: DbId,
}

/// A validated trade, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradePlan {
    pub franchise_a: DbId,
    pub franchise_b: DbId,
    pick_moves: Vec<AssetMove>,
    prospect_moves: Vec<AssetMove>,
}

impl TradePlan {
    /// Parse and validate a raw request. Performs no I/O.
    pub fn parse(request: &TradeRequest) -> Result<Self, CoreError> {
        let franchise_a = parse_id(IdKind::Franchise, &request.franchise_a_id)?;
        let franchise_b = parse_id(IdKind::Franchise, &request.franchise_b_id)?;
        if franchise_a == franchise_b {
            return Err(CoreError::Validation(format!(
                "franchise {franchise_a} cannot trade with itself"
            )));
        }

        let picks_a = parse_ids(IdKind::Pick, &request.picks_a)?;
        let picks_b = parse_ids(IdKind::Pick, &request.picks_b)?;
        let prospects_a = parse_ids(IdKind::Prospect, &request.prospects_a)?;
        let prospects_b = parse_ids(IdKind::Prospect, &request.prospects_b)?;

        let pick_moves = collect_moves("pick", &picks_a, &picks_b, franchise_a, franchise_b)?;
        let prospect_moves = collect_moves(
            "prospect",
            &prospects_a,
            &prospects_b,
            franchise_a,
            franchise_b,
        )?;

        if pick_moves.is_empty() && prospect_moves.is_empty() {
            return Err(CoreError::Validation(
                "trade must include at least one pick or prospect".to_string(),
            ));
        }

        Ok(Self {
            franchise_a,
            franchise_b,
            pick_moves,
            prospect_moves,
        })
    }

    /// Pick moves in ascending pick id (lock) order.
    pub fn pick_moves(&self) -> &[AssetMove] {
        &self.pick_moves
    }

    /// Prospect moves in ascending prospect id (lock) order.
    pub fn prospect_moves(&self) -> &[AssetMove] {
        &self.prospect_moves
    }
}

fn collect_moves(
    label: &str,
    offered_by_a: &[DbId],
    offered_by_b: &[DbId],
    franchise_a: DbId,
    franchise_b: DbId,
) -> Result<Vec<AssetMove>, CoreError> {
    let mut seen = HashSet::with_capacity(offered_by_a.len() + offered_by_b.len());
    let mut moves = Vec::with_capacity(offered_by_a.len() + offered_by_b.len());

    let sides = [
        (offered_by_a, franchise_a, franchise_b),
        (offered_by_b, franchise_b, franchise_a),
    ];
    for (ids, from, to) in sides {
        for &asset_id in ids {
            if !seen.insert(asset_id) {
                return Err(CoreError::Validation(format!(
                    "{label} {asset_id} is listed more than once in the trade"
                )));
            }
            moves.push(AssetMove { asset_id, from, to });
        }
    }

    moves.sort_by_key(|m| m.asset_id);
    Ok(moves)
}
