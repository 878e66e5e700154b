//! Repository for the `franchises` table.

use draftroom_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::franchise::{CreateFranchise, Franchise};

const COLUMNS: &str = "id, league_id, name, owner_name, foundation_year, created_at, updated_at";

/// Read access to franchises, plus creation for registration.
pub struct FranchiseRepo;

impl FranchiseRepo {
    /// Insert a new franchise, returning the created row.
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateFranchise,
    ) -> Result<Franchise, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO franchises (league_id, name, owner_name, foundation_year)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Franchise>(&query)
            .bind(input.league_id)
            .bind(&input.name)
            .bind(&input.owner_name)
            .bind(&input.foundation_year)
            .fetch_one(executor)
            .await
    }

    /// Find a franchise by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Franchise>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM franchises WHERE id = $1");
        sqlx::query_as::<_, Franchise>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
