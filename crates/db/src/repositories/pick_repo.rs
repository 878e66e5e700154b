//! Repository for the `picks` table.

use draftroom_core::draft_board::PickPositions;
use draftroom_core::types::DbId;
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::franchise::Franchise;
use crate::models::pick::{NewPick, Pick};
use crate::repositories::MAX_LIST_ROWS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, season, round, position_in_round, position_overall, prospect_id, \
    owner_id, owner_name, last_owner_id, last_owner_name, origin_id, origin_name, \
    created_at, updated_at";

/// Listing order: draft order within a season, undrawn picks last.
const ORDER: &str = "ORDER BY season, round, position_overall NULLS LAST, origin_name, id";

/// Provides data access for picks.
pub struct PickRepo;

impl PickRepo {
    /// Insert a freshly generated pick owned by its originating franchise.
    pub async fn create(conn: &mut PgConnection, input: &NewPick) -> Result<Pick, sqlx::Error> {
        let query = format!(
            "INSERT INTO picks
                (season, round, position_in_round, position_overall, prospect_id,
                 owner_id, owner_name, last_owner_id, last_owner_name, origin_id, origin_name)
             VALUES ($1, $2, $3, $4, NULL, $5, $6, $5, $6, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pick>(&query)
            .bind(input.season)
            .bind(input.round)
            .bind(input.positions.in_round)
            .bind(input.positions.overall)
            .bind(input.franchise_id)
            .bind(&input.franchise_name)
            .fetch_one(conn)
            .await
    }

    /// Find a pick by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Pick>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM picks WHERE id = $1");
        sqlx::query_as::<_, Pick>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a pick by ID and hold a row lock until the transaction ends.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Pick>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM picks WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Pick>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Lock and return every pick matching the natural key
    /// `(origin, season, round)`.
    ///
    /// More than one row means the uniqueness constraint has been broken
    /// elsewhere; the caller decides how to report it.
    pub async fn find_by_natural_key_for_update(
        conn: &mut PgConnection,
        origin_id: DbId,
        season: i32,
        round: i32,
    ) -> Result<Vec<Pick>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM picks
             WHERE origin_id = $1 AND season = $2 AND round = $3
             FOR UPDATE"
        );
        sqlx::query_as::<_, Pick>(&query)
            .bind(origin_id)
            .bind(season)
            .bind(round)
            .fetch_all(conn)
            .await
    }

    /// Rewrite the numbering of an existing pick. Ownership and the prospect
    /// link are untouched. Returns `None` if the pick does not exist.
    pub async fn update_numbering(
        conn: &mut PgConnection,
        id: DbId,
        season: i32,
        round: i32,
        positions: PickPositions,
    ) -> Result<Option<Pick>, sqlx::Error> {
        let query = format!(
            "UPDATE picks SET
                season = $2,
                round = $3,
                position_in_round = $4,
                position_overall = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pick>(&query)
            .bind(id)
            .bind(season)
            .bind(round)
            .bind(positions.in_round)
            .bind(positions.overall)
            .fetch_optional(conn)
            .await
    }

    /// Set or clear the prospect a pick was used on. Returns `None` if the
    /// pick does not exist.
    pub async fn set_prospect(
        conn: &mut PgConnection,
        id: DbId,
        prospect_id: Option<DbId>,
    ) -> Result<Option<Pick>, sqlx::Error> {
        let query = format!(
            "UPDATE picks SET prospect_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pick>(&query)
            .bind(id)
            .bind(prospect_id)
            .fetch_optional(conn)
            .await
    }

    /// Hand a pick from `from` to `to`, recording `from` as the last owner.
    /// Both display names are taken from the franchise rows. Returns `None`
    /// if the pick does not exist.
    pub async fn transfer(
        conn: &mut PgConnection,
        id: DbId,
        from: &Franchise,
        to: &Franchise,
    ) -> Result<Option<Pick>, sqlx::Error> {
        let query = format!(
            "UPDATE picks SET
                last_owner_id = $2,
                last_owner_name = $3,
                owner_id = $4,
                owner_name = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pick>(&query)
            .bind(id)
            .bind(from.id)
            .bind(&from.name)
            .bind(to.id)
            .bind(&to.name)
            .fetch_optional(conn)
            .await
    }

    /// List every pick of a draft season.
    pub async fn list_by_season(pool: &PgPool, season: i32) -> Result<Vec<Pick>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM picks WHERE season = $1 {ORDER} LIMIT $2");
        sqlx::query_as::<_, Pick>(&query)
            .bind(season)
            .bind(MAX_LIST_ROWS)
            .fetch_all(pool)
            .await
    }

    /// List the picks a franchise currently owns, across seasons.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Pick>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM picks WHERE owner_id = $1 {ORDER} LIMIT $2");
        sqlx::query_as::<_, Pick>(&query)
            .bind(owner_id)
            .bind(MAX_LIST_ROWS)
            .fetch_all(pool)
            .await
    }
}
