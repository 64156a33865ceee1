//! User management service

use crate::auth::password::hash_password;
use crate::core::models::{User, UserWithRole};
use crate::storage::StorageLayer;
use crate::utils::error::{PanelError, Result};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Fields of a user update; absent fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

/// User store operations with their lifecycle guards
#[derive(Clone)]
pub struct UserService {
    storage: Arc<StorageLayer>,
}

impl UserService {
    /// Create a new user service
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// List users with roles expanded, newest first
    pub async fn list(&self) -> Result<Vec<UserWithRole>> {
        self.storage.database.list_users().await
    }

    /// Create a user
    ///
    /// Guards: no existing user with the same email, and the referenced role
    /// must exist. The password is hashed before anything is persisted.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role_id: Uuid,
    ) -> Result<UserWithRole> {
        if self
            .storage
            .database
            .find_user_by_email(email)
            .await?
            .is_some()
        {
            return Err(PanelError::validation("User already exists"));
        }

        if self
            .storage
            .database
            .find_role_by_id(role_id)
            .await?
            .is_none()
        {
            return Err(PanelError::validation("Invalid role"));
        }

        let password_hash = hash_password(password)?;
        let user = User::new(name.to_string(), email.to_string(), password_hash, role_id);
        let user = self.storage.database.create_user(&user).await?;

        info!("Created user: {}", user.email);

        self.storage
            .database
            .find_user_with_role(user.id)
            .await?
            .ok_or_else(|| PanelError::internal("Created user not found on re-read"))
    }

    /// Update a user
    ///
    /// Guards: target must exist; a changed role reference must resolve to
    /// an existing role.
    pub async fn update(&self, id: Uuid, fields: UserUpdate) -> Result<UserWithRole> {
        let mut user = self
            .storage
            .database
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| PanelError::not_found("User not found"))?;

        if let Some(role_id) = fields.role_id {
            if self
                .storage
                .database
                .find_role_by_id(role_id)
                .await?
                .is_none()
            {
                return Err(PanelError::validation("Invalid role"));
            }
            user.role_id = role_id;
        }

        if let Some(name) = fields.name {
            user.name = name;
        }
        if let Some(email) = fields.email {
            user.email = email;
        }
        if let Some(is_active) = fields.is_active {
            user.is_active = is_active;
        }

        let user = self.storage.database.update_user(&user).await?;

        info!("Updated user: {}", user.email);

        self.storage
            .database
            .find_user_with_role(user.id)
            .await?
            .ok_or_else(|| PanelError::internal("Updated user not found on re-read"))
    }

    /// Delete a user
    ///
    /// Guards: the acting actor can never delete their own account, even
    /// when otherwise authorized; then the target must exist.
    pub async fn delete(&self, id: Uuid, acting_actor_id: Uuid) -> Result<()> {
        if id == acting_actor_id {
            return Err(PanelError::conflict("Cannot delete your own account"));
        }

        let removed = self.storage.database.delete_user(id).await?;
        if removed == 0 {
            return Err(PanelError::not_found("User not found"));
        }

        info!("Deleted user: {}", id);
        Ok(())
    }
}
