//! HTTP-level tests for prospect import and franchise roster reads.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_expect, seed_franchise, seed_league};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_import_skips_known_prospects(pool: PgPool) {
    let batch = json!({ "prospects": [
        {
            "full_name": "Ada Skater",
            "first_name": "Ada",
            "last_name": "Skater",
            "birthdate": "2007-03-14",
            "nhl_draft_year": "2025",
            "nhl_draft_pick_overall": "17",
            "position_code": "C",
        },
        { "full_name": "Bo Goalie", "birthdate": "2006-11-02" },
    ]});

    let first = post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/prospects/bulk",
        batch.clone(),
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(first["data"]["created"].as_array().unwrap().len(), 2);
    assert_eq!(first["data"]["skipped"], 0);

    let second = post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/prospects/bulk",
        batch,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(second["data"]["created"].as_array().unwrap().len(), 0);
    assert_eq!(second["data"]["skipped"], 2);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prospects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_import_is_all_or_nothing(pool: PgPool) {
    let json = post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/prospects/bulk",
        json!({ "prospects": [
            { "full_name": "Ada Skater" },
            { "full_name": "" },
        ]}),
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["status"], "validation_error");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prospects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_franchise_reads_require_existing_franchise(pool: PgPool) {
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/franchises/{}/prospects", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/franchises/abc/picks",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let league = seed_league(&pool, 1, 20).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/franchises/{}/prospects", wolves.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
}
