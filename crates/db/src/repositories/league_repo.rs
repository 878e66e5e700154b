//! Repository for the `leagues` table.

use draftroom_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::league::{CreateLeague, League};

const COLUMNS: &str = "id, name, foundation_year, max_franchises, max_prospects, \
    draft_rounds, created_at, updated_at";

/// Read access to leagues, plus creation for registration and tests.
pub struct LeagueRepo;

impl LeagueRepo {
    /// Insert a new league, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateLeague) -> Result<League, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO leagues (name, foundation_year, max_franchises, max_prospects, draft_rounds)
             VALUES ($1, COALESCE($2, ''), $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, League>(&query)
            .bind(&input.name)
            .bind(&input.foundation_year)
            .bind(input.max_franchises)
            .bind(input.max_prospects)
            .bind(input.draft_rounds)
            .fetch_one(executor)
            .await
    }

    /// Find a league by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<League>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM leagues WHERE id = $1");
        sqlx::query_as::<_, League>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Number of franchises currently registered in a league.
    pub async fn count_franchises<'e, E>(executor: E, league_id: DbId) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM franchises WHERE league_id = $1")
            .bind(league_id)
            .fetch_one(executor)
            .await?;
        Ok(row.0)
    }
}
