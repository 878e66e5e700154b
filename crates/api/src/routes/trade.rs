use axum::routing::post;
use axum::Router;

use crate::handlers::trade;
use crate::state::AppState;

/// Trades, nested under `/trades`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(trade::create))
}
