//! # RBAC Panel RS
//!
//! A role-based access control admin panel backend. Manages a permission
//! vocabulary, roles carrying permission sets, and user accounts bound to
//! roles, with JWT-authenticated HTTP endpoints for administering both.
//!
//! ## Features
//!
//! - **Role-Based Access Control**: Closed permission vocabulary with ANY-of
//!   authorization checks
//! - **JWT Authentication**: Stateless tokens carrying a permission snapshot
//!   resolved at login
//! - **Lifecycle Guards**: Duplicate names/emails, role-in-use and
//!   self-deletion protection, backed by database constraints
//! - **Bootstrap Seeding**: Idempotent default roles and admin account on
//!   startup
//! - **Pluggable Storage**: PostgreSQL with automatic SQLite fallback
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rbac_panel_rs::{Config, Panel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/panel.yaml").await?;
//!     let panel = Panel::new(config).await?;
//!     panel.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::rbac::{Actor, Permission, has_any_permission, require_any_permission};
pub use config::Config;
pub use core::models::{Role, User, UserWithRole};
pub use utils::error::{PanelError, Result};

use tracing::info;

/// A complete panel instance wrapping the HTTP server
pub struct Panel {
    config: Config,
    server: server::server::HttpServer,
}

impl Panel {
    /// Create a new panel instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new panel instance");

        let server = server::server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the panel server
    pub async fn run(self) -> Result<()> {
        info!("Starting RBAC panel");
        info!("Listening on {}", self.config.server().address());

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
