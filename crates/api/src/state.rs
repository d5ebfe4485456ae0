use std::sync::Arc;

use newsgen_generator::Generator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: newsgen_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The article generator; `None` when no completion API key is
    /// configured, in which case the generate endpoint reports a
    /// configuration error.
    pub generator: Option<Arc<Generator>>,
}
