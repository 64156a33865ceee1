//! Role management service

use crate::auth::rbac::parse_permissions;
use crate::core::models::Role;
use crate::storage::StorageLayer;
use crate::utils::error::{PanelError, Result};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Fields of a role update; absent fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Role store operations with their lifecycle guards
#[derive(Clone)]
pub struct RoleService {
    storage: Arc<StorageLayer>,
}

impl RoleService {
    /// Create a new role service
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// List active roles, name ascending
    pub async fn list(&self) -> Result<Vec<Role>> {
        self.storage.database.list_active_roles().await
    }

    /// Create a role
    ///
    /// Guards: non-empty trimmed name, required description, permission
    /// tokens within the vocabulary, no existing role with the same name.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        permissions: &[String],
    ) -> Result<Role> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PanelError::validation("Role name cannot be empty"));
        }
        if description.trim().is_empty() {
            return Err(PanelError::validation("Role description is required"));
        }

        let permissions = parse_permissions(permissions)?;

        if self.storage.database.find_role_by_name(name).await?.is_some() {
            return Err(PanelError::validation("Role already exists"));
        }

        let role = Role::new(name.to_string(), description.to_string(), permissions);
        let role = self.storage.database.create_role(&role).await?;

        info!("Created role: {}", role.name);
        Ok(role)
    }

    /// Update a role
    ///
    /// Guards: target must exist; a rename re-runs the duplicate-name check;
    /// replacement permissions are re-validated against the vocabulary.
    pub async fn update(&self, id: Uuid, fields: RoleUpdate) -> Result<Role> {
        let mut role = self
            .storage
            .database
            .find_role_by_id(id)
            .await?
            .ok_or_else(|| PanelError::not_found("Role not found"))?;

        if let Some(name) = fields.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(PanelError::validation("Role name cannot be empty"));
            }
            if name != role.name
                && self
                    .storage
                    .database
                    .find_role_by_name(&name)
                    .await?
                    .is_some()
            {
                return Err(PanelError::validation("Role already exists"));
            }
            role.name = name;
        }

        if let Some(description) = fields.description {
            if description.trim().is_empty() {
                return Err(PanelError::validation("Role description is required"));
            }
            role.description = description;
        }

        if let Some(tokens) = fields.permissions {
            role.permissions = parse_permissions(&tokens)?;
        }

        if let Some(is_active) = fields.is_active {
            role.is_active = is_active;
        }

        let role = self.storage.database.update_role(&role).await?;

        info!("Updated role: {}", role.name);
        Ok(role)
    }

    /// Delete a role
    ///
    /// Guards: no user may still reference the role (checked first, like the
    /// in-use error callers act on), then the target must exist.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let in_use = self.storage.database.count_users_with_role(id).await?;
        if in_use > 0 {
            return Err(PanelError::conflict(
                "Cannot delete role that is assigned to users",
            ));
        }

        let removed = self.storage.database.delete_role(id).await?;
        if removed == 0 {
            return Err(PanelError::not_found("Role not found"));
        }

        info!("Deleted role: {}", id);
        Ok(())
    }
}
