//! Application state for dependency injection.

use std::sync::Arc;

use crate::cache::UserCache;
use crate::config::GatewayConfig;
use crate::services::UserDetailService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_detail_service: Arc<dyn UserDetailService>,
    pub cache: UserCache,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        user_detail_service: Arc<dyn UserDetailService>,
        cache: UserCache,
        config: GatewayConfig,
    ) -> Self {
        Self {
            user_detail_service,
            cache,
            config,
        }
    }
}
