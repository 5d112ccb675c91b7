// Application state module
// Immutable catalog plus cached config values shared by every connection

use std::sync::Arc;

use super::types::Config;
use crate::catalog::Collection;
use crate::routing::RouteTable;

/// Application state
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn Collection>,
    pub routes: RouteTable,

    // Cached config values, read on every request
    pub access_log: bool,
    pub debug: bool,
}

impl AppState {
    /// Build state around an already-seeded catalog
    pub fn new(config: &Config, catalog: Arc<dyn Collection>) -> Self {
        let routes = RouteTable::for_collection(catalog.as_ref());
        Self {
            config: config.clone(),
            catalog,
            routes,
            access_log: config.logging.access_log,
            debug: config.logging.debug_enabled(),
        }
    }
}
