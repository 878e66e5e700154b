use axum::routing::get;
use axum::Router;

use crate::handlers::franchise;
use crate::state::AppState;

/// Franchise-scoped reads, nested under `/franchises`.
///
/// ```text
/// GET    /{id}/picks           list_picks
/// GET    /{id}/prospects       list_prospects
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/picks", get(franchise::list_picks))
        .route("/{id}/prospects", get(franchise::list_prospects))
}
