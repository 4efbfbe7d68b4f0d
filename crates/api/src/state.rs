use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: allagro_db::DbPool,
    /// Server configuration (JWT settings, bind address, CORS origins).
    pub config: Arc<ServerConfig>,
    /// Staleness bus; mutation handlers publish, the WebSocket endpoint
    /// subscribes.
    pub event_bus: Arc<allagro_events::EventBus>,
}
