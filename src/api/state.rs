use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::models::PlayerTable;

/// Shared handler state. The table is loaded once and never mutated, so
/// handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<PlayerTable>,
    pub dashboard: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(table: PlayerTable, dashboard: DashboardConfig) -> Self {
        Self {
            table: Arc::new(table),
            dashboard: Arc::new(dashboard),
        }
    }
}
