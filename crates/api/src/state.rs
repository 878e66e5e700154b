use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The engine keeps no other in-process state; everything lives in Postgres.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: draftroom_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
