//! Repository for the `prospects` table.
//!
//! The draft-link columns (`league_id`, `franchise_id`, `pick_id`) are only
//! written by the engine, inside a transaction that also writes the pick
//! side. Those writers take `&mut PgConnection`.

use draftroom_core::types::DbId;
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::prospect::{CreateProspect, Prospect};
use crate::repositories::MAX_LIST_ROWS;

const COLUMNS: &str = "id, full_name, first_name, last_name, nhl_team, birthdate, height, \
    weight, nhl_draft_year, nhl_draft_round, nhl_draft_pick_in_round, nhl_draft_pick_overall, \
    position_code, league_id, franchise_id, pick_id, created_at, updated_at";

/// Provides data access for prospects.
pub struct ProspectRepo;

impl ProspectRepo {
    /// Insert a new free (unrostered, undrafted) prospect.
    pub async fn create<'e, E>(executor: E, input: &CreateProspect) -> Result<Prospect, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO prospects
                (full_name, first_name, last_name, nhl_team, birthdate, height, weight,
                 nhl_draft_year, nhl_draft_round, nhl_draft_pick_in_round,
                 nhl_draft_pick_overall, position_code)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prospect>(&query)
            .bind(&input.full_name)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.nhl_team)
            .bind(&input.birthdate)
            .bind(&input.height)
            .bind(&input.weight)
            .bind(&input.nhl_draft_year)
            .bind(&input.nhl_draft_round)
            .bind(&input.nhl_draft_pick_in_round)
            .bind(&input.nhl_draft_pick_overall)
            .bind(&input.position_code)
            .fetch_one(executor)
            .await
    }

    /// Find a prospect by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Prospect>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM prospects WHERE id = $1");
        sqlx::query_as::<_, Prospect>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a prospect by ID and hold a row lock until the transaction ends.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Prospect>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prospects WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Prospect>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find an already imported prospect by its identifying attributes.
    pub async fn find_by_identity<'e, E>(
        executor: E,
        input: &CreateProspect,
    ) -> Result<Option<Prospect>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM prospects
             WHERE full_name = $1 AND birthdate = $2
               AND nhl_draft_year = $3 AND nhl_draft_pick_overall = $4
             LIMIT 1"
        );
        sqlx::query_as::<_, Prospect>(&query)
            .bind(&input.full_name)
            .bind(&input.birthdate)
            .bind(&input.nhl_draft_year)
            .bind(&input.nhl_draft_pick_overall)
            .fetch_optional(executor)
            .await
    }

    /// List the prospects rostered by a franchise, by name.
    pub async fn list_by_franchise(
        pool: &PgPool,
        franchise_id: DbId,
    ) -> Result<Vec<Prospect>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prospects
             WHERE franchise_id = $1
             ORDER BY last_name, first_name, id
             LIMIT $2"
        );
        sqlx::query_as::<_, Prospect>(&query)
            .bind(franchise_id)
            .bind(MAX_LIST_ROWS)
            .fetch_all(pool)
            .await
    }

    /// Count the prospects rostered by a franchise.
    pub async fn count_by_franchise<'e, E>(
        executor: E,
        franchise_id: DbId,
    ) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prospects WHERE franchise_id = $1")
            .bind(franchise_id)
            .fetch_one(executor)
            .await?;
        Ok(row.0)
    }

    /// Attach a prospect to a league, a franchise and the pick that drafted
    /// them. Returns `None` if the prospect does not exist.
    pub async fn assign(
        conn: &mut PgConnection,
        id: DbId,
        league_id: DbId,
        franchise_id: DbId,
        pick_id: DbId,
    ) -> Result<Option<Prospect>, sqlx::Error> {
        let query = format!(
            "UPDATE prospects SET league_id = $2, franchise_id = $3, pick_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prospect>(&query)
            .bind(id)
            .bind(league_id)
            .bind(franchise_id)
            .bind(pick_id)
            .fetch_optional(conn)
            .await
    }

    /// Return a prospect to the free pool: league, franchise and pick link
    /// are all cleared. Returns `None` if the prospect does not exist.
    pub async fn release(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Prospect>, sqlx::Error> {
        let query = format!(
            "UPDATE prospects SET league_id = NULL, franchise_id = NULL, pick_id = NULL
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prospect>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Move a prospect to another franchise. League and pick link are left
    /// as they are. Returns `None` if the prospect does not exist.
    pub async fn set_franchise(
        conn: &mut PgConnection,
        id: DbId,
        franchise_id: DbId,
    ) -> Result<Option<Prospect>, sqlx::Error> {
        let query = format!(
            "UPDATE prospects SET franchise_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prospect>(&query)
            .bind(id)
            .bind(franchise_id)
            .fetch_optional(conn)
            .await
    }
}
