use axum::routing::post;
use axum::Router;

use crate::handlers::picks;
use crate::state::AppState;

/// League-scoped routes, nested under `/leagues`.
///
/// ```text
/// POST   /{league_id}/picks    generate_or_update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{league_id}/picks", post(picks::generate_or_update))
}
