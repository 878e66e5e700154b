//! HTTP-level tests for trades.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, generate_board, get, pick_for, post_expect, seed_franchise, seed_league,
    seed_prospect,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use draftroom_db::models::franchise::Franchise;
use draftroom_db::models::league::League;
use draftroom_db::repositories::{PickRepo, ProspectRepo};

/// Draft a prospect onto a pick for a franchise through the API.
async fn draft(
    pool: &PgPool,
    league: &League,
    franchise: &Franchise,
    pick_id: &str,
    prospect_id: Uuid,
) {
    post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/draft",
        json!({
            "pick_id": pick_id,
            "prospect_id": prospect_id.to_string(),
            "franchise_id": franchise.id.to_string(),
            "league_id": league.id.to_string(),
        }),
        StatusCode::OK,
    )
    .await;
}

async fn owner_of(pool: &PgPool, pick_id: &str) -> (Uuid, Uuid) {
    let pick = PickRepo::find_by_id(pool, pick_id.parse().unwrap())
        .await
        .unwrap()
        .unwrap();
    (pick.owner_id, pick.last_owner_id)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_symmetric_pick_swap(pool: PgPool) {
    let league = seed_league(&pool, 1, 20).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let bears = seed_franchise(&pool, &league, "Bears").await;
    let board = generate_board(&pool, &league, 2025, &[(&wolves, 1), (&bears, 2)]).await;
    let wolves_pick = pick_for(&board, &wolves, 1);
    let bears_pick = pick_for(&board, &bears, 1);

    let json = post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "picks_a": [wolves_pick],
            "franchise_b_id": bears.id.to_string(),
            "picks_b": [bears_pick],
        }),
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["data"]["picks"].as_array().unwrap().len(), 2);

    assert_eq!(owner_of(&pool, &wolves_pick).await, (bears.id, wolves.id));
    assert_eq!(owner_of(&pool, &bears_pick).await, (wolves.id, bears.id));

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/franchises/{}/picks", bears.id),
    )
    .await;
    let json = body_json(response).await;
    let picks = json["data"].as_array().unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0]["id"], wolves_pick);
    assert_eq!(picks[0]["owner_name"], "Bears");
    assert_eq!(picks[0]["last_owner_name"], "Wolves");
    assert_eq!(picks[0]["origin_name"], "Wolves");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_traded_prospect_keeps_pick_link(pool: PgPool) {
    let league = seed_league(&pool, 1, 20).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let bears = seed_franchise(&pool, &league, "Bears").await;
    let board = generate_board(&pool, &league, 2025, &[(&wolves, 1)]).await;
    let pick_id = pick_for(&board, &wolves, 1);
    let prospect = seed_prospect(&pool, "Ada Skater").await;
    draft(&pool, &league, &wolves, &pick_id, prospect.id).await;

    post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "prospects_a": [prospect.id.to_string()],
            "franchise_b_id": bears.id.to_string(),
        }),
        StatusCode::OK,
    )
    .await;

    let moved = ProspectRepo::find_by_id(&pool, prospect.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.franchise_id, Some(bears.id));
    assert_eq!(moved.pick_id.map(|id| id.to_string()), Some(pick_id.clone()));
    // The pick itself still belongs to the drafting franchise.
    assert_eq!(owner_of(&pool, &pick_id).await, (wolves.id, wolves.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_offering_unowned_pick_conflicts(pool: PgPool) {
    let league = seed_league(&pool, 1, 20).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let bears = seed_franchise(&pool, &league, "Bears").await;
    let board = generate_board(&pool, &league, 2025, &[(&wolves, 1), (&bears, 2)]).await;
    let wolves_pick = pick_for(&board, &wolves, 1);
    let bears_pick = pick_for(&board, &bears, 1);

    // Wolves offer a pick they own and one they do not.
    let json = post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "picks_a": [wolves_pick, bears_pick],
            "franchise_b_id": bears.id.to_string(),
        }),
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(json["status"], "conflict");

    assert_eq!(owner_of(&pool, &wolves_pick).await, (wolves.id, wolves.id));
    assert_eq!(owner_of(&pool, &bears_pick).await, (bears.id, bears.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_conflict_after_pick_moved_rolls_back(pool: PgPool) {
    let league = seed_league(&pool, 1, 20).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let bears = seed_franchise(&pool, &league, "Bears").await;
    let board = generate_board(&pool, &league, 2025, &[(&wolves, 1)]).await;
    let wolves_pick = pick_for(&board, &wolves, 1);
    // Not rostered by anyone, so the Wolves cannot offer them.
    let free_agent = seed_prospect(&pool, "Cy Freeagent").await;

    // Picks move before prospects: the pick transfer is written, then the
    // prospect check fails.
    let json = post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "picks_a": [wolves_pick],
            "prospects_a": [free_agent.id.to_string()],
            "franchise_b_id": bears.id.to_string(),
        }),
        StatusCode::CONFLICT,
    )
    .await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("is not rostered by franchise"));

    assert_eq!(owner_of(&pool, &wolves_pick).await, (wolves.id, wolves.id));
    let free_agent = ProspectRepo::find_by_id(&pool, free_agent.id)
        .await
        .unwrap()
        .unwrap();
    assert!(free_agent.franchise_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_id_aborts_whole_trade(pool: PgPool) {
    let league = seed_league(&pool, 1, 20).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let bears = seed_franchise(&pool, &league, "Bears").await;
    let board = generate_board(&pool, &league, 2025, &[(&wolves, 1)]).await;
    let pick_id = pick_for(&board, &wolves, 1);

    post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "picks_a": [pick_id, "abc"],
            "franchise_b_id": bears.id.to_string(),
        }),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(owner_of(&pool, &pick_id).await, (wolves.id, wolves.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_pick_is_skipped(pool: PgPool) {
    let league = seed_league(&pool, 1, 20).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let bears = seed_franchise(&pool, &league, "Bears").await;
    let board = generate_board(&pool, &league, 2025, &[(&wolves, 1)]).await;
    let pick_id = pick_for(&board, &wolves, 1);
    let ghost = Uuid::new_v4().to_string();

    let json = post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "picks_a": [pick_id, ghost],
            "franchise_b_id": bears.id.to_string(),
        }),
        StatusCode::OK,
    )
    .await;

    assert_eq!(json["data"]["skipped_picks"], json!([ghost]));
    assert_eq!(owner_of(&pool, &pick_id).await, (bears.id, wolves.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_self_trade_rejected(pool: PgPool) {
    let league = seed_league(&pool, 1, 20).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let board = generate_board(&pool, &league, 2025, &[(&wolves, 1)]).await;

    post_expect(
        common::build_test_app(pool),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "picks_a": [pick_for(&board, &wolves, 1)],
            "franchise_b_id": wolves.id.to_string(),
        }),
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trade_respects_roster_cap(pool: PgPool) {
    let league = seed_league(&pool, 1, 1).await;
    let wolves = seed_franchise(&pool, &league, "Wolves").await;
    let bears = seed_franchise(&pool, &league, "Bears").await;
    let board = generate_board(&pool, &league, 2025, &[(&wolves, 1), (&bears, 2)]).await;
    let ada = seed_prospect(&pool, "Ada Skater").await;
    let bo = seed_prospect(&pool, "Bo Goalie").await;
    draft(&pool, &league, &wolves, &pick_for(&board, &wolves, 1), ada.id).await;
    draft(&pool, &league, &bears, &pick_for(&board, &bears, 1), bo.id).await;

    // A one-for-one swap keeps both rosters at the cap.
    post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "prospects_a": [ada.id.to_string()],
            "franchise_b_id": bears.id.to_string(),
            "prospects_b": [bo.id.to_string()],
        }),
        StatusCode::OK,
    )
    .await;

    // A one-sided move would put the Bears over.
    let json = post_expect(
        common::build_test_app(pool.clone()),
        "/api/v1/trades",
        json!({
            "franchise_a_id": wolves.id.to_string(),
            "prospects_a": [bo.id.to_string()],
            "franchise_b_id": bears.id.to_string(),
        }),
        StatusCode::CONFLICT,
    )
    .await;
    assert!(json["error"].as_str().unwrap().contains("maximum"));

    let bo = ProspectRepo::find_by_id(&pool, bo.id).await.unwrap().unwrap();
    assert_eq!(bo.franchise_id, Some(wolves.id));
}
