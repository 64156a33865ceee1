//! Configuration management for the panel
//!
//! This module handles loading and validation of all panel configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{PanelError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the panel
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Panel configuration
    pub panel: PanelConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PanelError::Config(format!("Failed to read config file: {}", e)))?;

        let panel: PanelConfig = serde_yaml::from_str(&content)
            .map_err(|e| PanelError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { panel };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let panel = PanelConfig::from_env()?;
        let config = Self { panel };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.panel.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.panel.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.panel.auth
    }

    /// Get bootstrap configuration
    pub fn bootstrap(&self) -> &BootstrapConfig {
        &self.panel.bootstrap
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.panel
            .server
            .validate()
            .map_err(|e| PanelError::Config(format!("Server config error: {}", e)))?;

        self.panel
            .server
            .cors
            .validate()
            .map_err(|e| PanelError::Config(format!("CORS config error: {}", e)))?;

        self.panel
            .storage
            .validate()
            .map_err(|e| PanelError::Config(format!("Storage config error: {}", e)))?;

        self.panel
            .auth
            .validate()
            .map_err(|e| PanelError::Config(format!("Auth config error: {}", e)))?;

        self.panel
            .bootstrap
            .validate()
            .map_err(|e| PanelError::Config(format!("Bootstrap config error: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(&self.panel.auth);

        debug!("Configuration validation completed");
        Ok(())
    }
}
