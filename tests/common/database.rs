//! Test database utilities
//!
//! Provides in-memory SQLite storage for testing without external
//! dependencies. Each test gets an isolated database instance.

use rbac_panel_rs::config::{DatabaseConfig, StorageConfig};
use rbac_panel_rs::storage::StorageLayer;
use std::sync::Arc;

/// Storage configuration pointing at an isolated in-memory SQLite database
///
/// In-memory SQLite exists per connection, so the pool is capped at one
/// connection.
pub fn test_storage_config() -> StorageConfig {
    StorageConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: 5,
        },
    }
}

/// Create a migrated in-memory storage layer
pub async fn create_test_storage() -> Arc<StorageLayer> {
    let storage = StorageLayer::new(&test_storage_config())
        .await
        .expect("Failed to create in-memory test storage");
    Arc::new(storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_storage_creation() {
        let storage = create_test_storage().await;
        assert!(storage.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_isolation() {
        let first = create_test_storage().await;
        let second = create_test_storage().await;

        let role = crate::common::fixtures::sample_role("Isolated");
        first.database.create_role(&role).await.unwrap();

        assert!(first
            .database
            .find_role_by_name("Isolated")
            .await
            .unwrap()
            .is_some());
        assert!(second
            .database
            .find_role_by_name("Isolated")
            .await
            .unwrap()
            .is_none());
    }
}
