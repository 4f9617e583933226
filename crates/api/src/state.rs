use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: assetbase_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Event bus carrying view-invalidation signals for read-side caches.
    pub event_bus: Arc<assetbase_events::EventBus>,
}
