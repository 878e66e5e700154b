//! Franchise entity model and DTOs.

use draftroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A franchise row from the `franchises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Franchise {
    pub id: DbId,
    pub league_id: DbId,
    /// Display name, cached onto picks as owner/last owner/origin name.
    pub name: String,
    pub owner_name: String,
    pub foundation_year: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new franchise.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFranchise {
    pub league_id: DbId,
    pub name: String,
    pub owner_name: Option<String>,
    pub foundation_year: Option<String>,
}
