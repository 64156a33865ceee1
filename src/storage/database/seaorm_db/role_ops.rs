use crate::core::models::Role;
use crate::utils::error::{PanelError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find role by ID
    pub async fn find_role_by_id(&self, role_id: uuid::Uuid) -> Result<Option<Role>> {
        debug!("Finding role by ID: {}", role_id);

        let role_model = entities::Role::find_by_id(role_id)
            .one(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(role_model.map(|model| model.to_domain_role()))
    }

    /// Find role by name (case-sensitive exact match)
    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        debug!("Finding role by name: {}", name);

        let role_model = entities::Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(role_model.map(|model| model.to_domain_role()))
    }

    /// List active roles, name ascending
    pub async fn list_active_roles(&self) -> Result<Vec<Role>> {
        debug!("Listing active roles");

        let role_models = entities::Role::find()
            .filter(role::Column::IsActive.eq(true))
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(role_models
            .iter()
            .map(|model| model.to_domain_role())
            .collect())
    }

    /// Create a new role
    pub async fn create_role(&self, role: &Role) -> Result<Role> {
        debug!("Creating role: {}", role.name);

        let active_model = role::Model::from_domain_role(role);

        let _result = entities::Role::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(role.clone())
    }

    /// Update an existing role with the given domain state
    pub async fn update_role(&self, role: &Role) -> Result<Role> {
        debug!("Updating role: {}", role.id);

        let mut active_model: role::ActiveModel = entities::Role::find_by_id(role.id)
            .one(&self.db)
            .await
            .map_err(PanelError::Database)?
            .ok_or_else(|| PanelError::not_found("Role not found"))?
            .into();

        let tokens: Vec<&str> = role.permissions.iter().map(|p| p.as_str()).collect();
        active_model.name = Set(role.name.clone());
        active_model.description = Set(role.description.clone());
        active_model.permissions = Set(serde_json::json!(tokens));
        active_model.is_active = Set(role.is_active);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(updated.to_domain_role())
    }

    /// Delete a role by ID, returning the number of rows removed
    pub async fn delete_role(&self, role_id: uuid::Uuid) -> Result<u64> {
        debug!("Deleting role: {}", role_id);

        let result = entities::Role::delete_by_id(role_id)
            .exec(&self.db)
            .await
            .map_err(PanelError::Database)?;

        Ok(result.rows_affected)
    }
}
