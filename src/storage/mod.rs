//! Storage layer
//!
//! Owns the persistence collaborator. The database serializes concurrent
//! writes; the panel keeps no cross-request mutable state of its own.

pub mod database;

pub use database::SeaOrmDatabase;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use tracing::info;

/// Storage layer shared across all requests
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database implementation
    pub database: SeaOrmDatabase,
}

impl StorageLayer {
    /// Connect to storage and apply pending migrations
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        let database = SeaOrmDatabase::new(&config.database).await?;
        database.migrate().await?;

        info!("Storage layer initialized successfully");
        Ok(Self { database })
    }

    /// Health check across storage components
    pub async fn health_check(&self) -> Result<()> {
        self.database.health_check().await
    }
}
