use std::sync::Arc;

use studybuddy_db::DbPool;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`.
///
/// There is no other process-wide state; the pool and config live here.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
}
