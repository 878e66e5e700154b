#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use draftroom_api::app::build_router;
use draftroom_api::config::ServerConfig;
use draftroom_api::state::AppState;
use draftroom_db::models::franchise::{CreateFranchise, Franchise};
use draftroom_db::models::league::{CreateLeague, League};
use draftroom_db::models::prospect::{CreateProspect, Prospect};
use draftroom_db::repositories::{FranchiseRepo, LeagueRepo, ProspectRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// The pool is supplied by `#[sqlx::test]`, so the database URL is unused.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: String::new(),
        database_max_connections: 5,
    }
}

/// Build the production router, with its full middleware stack, over the
/// given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST and assert the status, returning the parsed body.
pub async fn post_expect(app: Router, uri: &str, body: Value, expected: StatusCode) -> Value {
    let response = post_json(app, uri, body).await;
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub async fn seed_league(pool: &PgPool, draft_rounds: i32, max_prospects: i32) -> League {
    LeagueRepo::create(
        pool,
        &CreateLeague {
            name: format!("League {}", uuid::Uuid::new_v4()),
            foundation_year: None,
            max_franchises: 16,
            max_prospects,
            draft_rounds,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_franchise(pool: &PgPool, league: &League, name: &str) -> Franchise {
    FranchiseRepo::create(
        pool,
        &CreateFranchise {
            league_id: league.id,
            name: name.to_string(),
            owner_name: Some(format!("{name} GM")),
            foundation_year: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_prospect(pool: &PgPool, full_name: &str) -> Prospect {
    ProspectRepo::create(
        pool,
        &CreateProspect {
            full_name: full_name.to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

/// Generate a board for the given `(franchise, lottery_position)` entries and
/// return the `data.picks` array.
pub async fn generate_board(
    pool: &PgPool,
    league: &League,
    season: i32,
    entries: &[(&Franchise, i32)],
) -> Vec<Value> {
    let picks: Vec<Value> = entries
        .iter()
        .map(|(f, lottery)| {
            serde_json::json!({
                "franchise_id": f.id.to_string(),
                "franchise_name": f.name,
                "season": season,
                "lottery_position": lottery,
            })
        })
        .collect();
    let json = post_expect(
        build_test_app(pool.clone()),
        &format!("/api/v1/leagues/{}/picks", league.id),
        serde_json::json!({ "picks": picks }),
        StatusCode::CREATED,
    )
    .await;
    json["data"]["picks"].as_array().unwrap().clone()
}

/// Find the generated pick for a franchise and round in a board response.
pub fn pick_for(board: &[Value], franchise: &Franchise, round: i64) -> String {
    board
        .iter()
        .find(|p| p["origin_id"] == franchise.id.to_string() && p["round"] == round)
        .unwrap_or_else(|| panic!("no pick for {} round {round}", franchise.name))["id"]
        .as_str()
        .unwrap()
        .to_string()
}
