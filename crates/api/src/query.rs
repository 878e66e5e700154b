//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /picks?season=`.
#[derive(Debug, Deserialize)]
pub struct SeasonParams {
    pub season: i32,
}
