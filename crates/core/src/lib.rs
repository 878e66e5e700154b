//! Domain logic for the draft and trade ownership engine.
//!
//! Pure functions and types only; persistence lives in `draftroom-db` and the
//! transactional engine in `draftroom-api`.

pub mod draft_board;
pub mod error;
pub mod identifier;
pub mod trade;
pub mod types;
