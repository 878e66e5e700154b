//! The draft and trade ownership engine.
//!
//! Each operation parses its identifiers up front, then runs as one Postgres
//! transaction: rows are locked with `SELECT ... FOR UPDATE` before any
//! precondition is checked, both sides of every pick/prospect link are
//! written together, and any early return drops the transaction, which rolls
//! it back.
//!
//! Lock order is the same everywhere: picks before prospects, ascending id
//! within each table.

pub mod board;
pub mod draft;
pub mod trade;

pub use board::{generate_or_update_picks, BoardSummary};
pub use draft::{draft, undraft, DraftOutcome, DraftRequest, UndraftRequest};
pub use trade::{trade, TradeOutcome};
