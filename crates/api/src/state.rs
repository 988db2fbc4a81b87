use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable. The start timestamp is captured exactly once
/// at process startup and only ever read afterwards, so concurrent
/// requests need no synchronization around it.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// When the process started; read by the root endpoint for uptime.
    pub started_at: DateTime<Utc>,
}
