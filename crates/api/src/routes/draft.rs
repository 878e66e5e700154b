use axum::routing::post;
use axum::Router;

use crate::handlers::draft;
use crate::state::AppState;

/// Draft actions, merged at the `/api/v1` root.
///
/// ```text
/// POST   /draft                draft
/// POST   /undraft              undraft
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/draft", post(draft::draft))
        .route("/undraft", post(draft::undraft))
}
