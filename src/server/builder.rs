//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{PanelError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| PanelError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting RBAC admin panel");

    let config_path = "config/panel.yaml";
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "Configuration file loading failed, falling back to environment: {}",
                e
            );
            Config::from_env()?
        }
    };

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   POST   /api/auth/login - Login");
    info!("   POST   /api/auth/register - Self-registration");
    info!("   GET    /api/auth/me - Current user");
    info!("   GET    /api/roles - List roles");
    info!("   POST   /api/roles - Create role");
    info!("   PUT    /api/roles/{{id}} - Update role");
    info!("   DELETE /api/roles/{{id}} - Delete role");
    info!("   GET    /api/users - List users");
    info!("   POST   /api/users - Create user");
    info!("   PUT    /api/users/{{id}} - Update user");
    info!("   DELETE /api/users/{{id}} - Delete user");

    server.start().await
}
