//! Configuration data models
//!
//! This module defines all configuration structures used by the panel.

pub mod auth;
pub mod bootstrap;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use bootstrap::*;
pub use server::*;
pub use storage::*;

use serde::{Deserialize, Serialize};

/// Top-level panel configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PanelConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Bootstrap seeding configuration
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

impl PanelConfig {
    /// Build a configuration from environment variables only
    pub fn from_env() -> crate::utils::error::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            storage: StorageConfig::from_env(),
            auth: AuthConfig::from_env(),
            bootstrap: BootstrapConfig::default(),
        })
    }
}

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5000
}

pub(crate) fn default_true() -> bool {
    true
}
