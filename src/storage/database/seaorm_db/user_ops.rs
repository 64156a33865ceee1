use crate::core::models::{User, UserWithRole};
use crate::utils::error::{PanelError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: uuid::Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by ID with its role expanded
    pub async fn find_user_with_role(&self, user_id: uuid::Uuid) -> Result<Option<UserWithRole>> {
        debug!("Finding user with role: {}", user_id);

        let result = entities::User::find_by_id(user_id)
            .find_also_related(entities::Role)
            .one(&self.db)
            .await
            .map_err(PanelError::Database)?;

        match result {
            Some((user_model, Some(role_model))) => Ok(Some(UserWithRole {
                user: user_model.to_domain_user(),
                role: role_model.to_domain_role(),
            })),
            Some((user_model, None)) => Err(PanelError::internal(format!(
                "User {} references a missing role",
                user_model.id
            ))),
            None => Ok(None),
        }
    }

    /// List all users with roles expanded, newest first
    pub async fn list_users(&self) -> Result<Vec<UserWithRole>> {
        debug!("Listing users");

        let rows = entities::User::find()
            .find_also_related(entities::Role)
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(PanelError::Database)?;

        rows.into_iter()
            .map(|(user_model, role_model)| {
                let role_model = role_model.ok_or_else(|| {
                    PanelError::internal(format!(
                        "User {} references a missing role",
                        user_model.id
                    ))
                })?;
                Ok(UserWithRole {
                    user: user_model.to_domain_user(),
                    role: role_model.to_domain_role(),
                })
            })
            .collect()
    }

    /// Count users referencing the given role
    pub async fn count_users_with_role(&self, role_id: uuid::Uuid) -> Result<u64> {
        debug!("Counting users with role: {}", role_id);

        entities::User::find()
            .filter(user::Column::RoleId.eq(role_id))
            .count(&self.db)
            .await
            .map_err(PanelError::Database)
    }

    /// Create a new user
    pub async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.email);

        let active_model = user::Model::from_domain_user(user);

        let _result = entities::User::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(user.clone())
    }

    /// Update an existing user with the given domain state
    pub async fn update_user(&self, user: &User) -> Result<User> {
        debug!("Updating user: {}", user.id);

        let mut active_model: user::ActiveModel = entities::User::find_by_id(user.id)
            .one(&self.db)
            .await
            .map_err(PanelError::Database)?
            .ok_or_else(|| PanelError::not_found("User not found"))?
            .into();

        active_model.name = Set(user.name.clone());
        active_model.email = Set(user.email.clone());
        active_model.role_id = Set(user.role_id);
        active_model.is_active = Set(user.is_active);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(updated.to_domain_user())
    }

    /// Delete a user by ID, returning the number of rows removed
    pub async fn delete_user(&self, user_id: uuid::Uuid) -> Result<u64> {
        debug!("Deleting user: {}", user_id);

        let result = entities::User::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(result.rows_affected)
    }

    /// Update user last login
    pub async fn update_user_last_login(&self, user_id: uuid::Uuid) -> Result<()> {
        debug!("Updating last login for user: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(PanelError::Database)?
            .ok_or_else(|| PanelError::not_found("User not found"))?;

        let mut active_model: user::ActiveModel = user_model.into();
        active_model.last_login_at = Set(Some(chrono::Utc::now().into()));
        active_model.updated_at = Set(chrono::Utc::now().into());

        active_model
            .update(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(())
    }
}
