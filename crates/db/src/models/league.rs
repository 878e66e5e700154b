//! League entity model and DTOs.

use draftroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A league row from the `leagues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct League {
    pub id: DbId,
    pub name: String,
    pub foundation_year: String,
    pub max_franchises: i32,
    /// Maximum number of prospects a single franchise may roster.
    pub max_prospects: i32,
    /// Number of rounds in each season's draft.
    pub draft_rounds: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new league.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLeague {
    pub name: String,
    pub foundation_year: Option<String>,
    pub max_franchises: i32,
    pub max_prospects: i32,
    pub draft_rounds: i32,
}
