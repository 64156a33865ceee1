//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::services::{RoleService, UserService};
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across threads.
#[derive(Clone)]
pub struct AppState {
    /// Panel configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Role management service
    pub roles: RoleService,
    /// User management service
    pub users: UserService,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let storage = Arc::new(storage);
        let auth = Arc::new(AuthSystem::new(config.auth(), storage.clone()));
        let roles = RoleService::new(storage.clone());
        let users = UserService::new(storage.clone());

        Self {
            config: Arc::new(config),
            auth,
            storage,
            roles,
            users,
        }
    }

    /// Get panel configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
