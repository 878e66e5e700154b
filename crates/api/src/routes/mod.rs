pub mod draft;
pub mod franchise;
pub mod health;
pub mod league;
pub mod picks;
pub mod prospects;
pub mod trade;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /leagues/{league_id}/picks          generate or renumber picks (POST)
///
/// /picks?season=                      list a season's picks (GET)
///
/// /draft                              link a prospect to a pick (POST)
/// /undraft                            unlink them (POST)
///
/// /trades                             exchange picks and prospects (POST)
///
/// /franchises/{id}/picks              picks owned by a franchise (GET)
/// /franchises/{id}/prospects          prospects rostered by a franchise (GET)
///
/// /prospects/bulk                     import prospects (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/leagues", league::router())
        .nest("/picks", picks::router())
        .nest("/franchises", franchise::router())
        .nest("/prospects", prospects::router())
        .nest("/trades", trade::router())
        .merge(draft::router())
}
