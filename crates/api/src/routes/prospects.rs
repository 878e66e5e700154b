use axum::routing::post;
use axum::Router;

use crate::handlers::prospects;
use crate::state::AppState;

/// Prospect import, nested under `/prospects`.
pub fn router() -> Router<AppState> {
    Router::new().route("/bulk", post(prospects::create_bulk))
}
