use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth::rbac::Permission;

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    /// Role ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Role name (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Role description
    pub description: String,

    /// Granted permissions, stored as a JSON array of tokens
    pub permissions: Json,

    /// Whether the role is active
    pub is_active: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Role entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Users referencing this role
    #[sea_orm(has_many = "super::user::Entity")]
    Users,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain role model
    ///
    /// Tokens outside the vocabulary are dropped rather than failing the
    /// whole read; the API boundary prevents new ones from being stored.
    pub fn to_domain_role(&self) -> crate::core::models::Role {
        let tokens: Vec<String> =
            serde_json::from_value(self.permissions.clone()).unwrap_or_default();
        let permissions = tokens
            .iter()
            .filter_map(|token| token.parse::<Permission>().ok())
            .collect();

        crate::core::models::Role {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            permissions,
            is_active: self.is_active,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain role model to SeaORM active model
    pub fn from_domain_role(role: &crate::core::models::Role) -> ActiveModel {
        let tokens: Vec<&str> = role.permissions.iter().map(|p| p.as_str()).collect();

        ActiveModel {
            id: Set(role.id),
            name: Set(role.name.clone()),
            description: Set(role.description.clone()),
            permissions: Set(serde_json::json!(tokens)),
            is_active: Set(role.is_active),
            created_at: Set(role.created_at.into()),
            updated_at: Set(role.updated_at.into()),
        }
    }
}
