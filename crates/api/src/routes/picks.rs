use axum::routing::get;
use axum::Router;

use crate::handlers::picks;
use crate::state::AppState;

/// Pick listing, nested under `/picks`.
///
/// ```text
/// GET    /?season=             list_by_season
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(picks::list_by_season))
}
