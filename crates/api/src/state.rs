use std::sync::Arc;

use reel_storage::ObjectStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted and everything else sits
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reel_db::DbPool,
    /// Server configuration (session, gate and upload settings).
    pub config: Arc<ServerConfig>,
    /// Object storage for uploaded images.
    pub storage: Arc<dyn ObjectStorage>,
}
