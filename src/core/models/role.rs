//! Role domain model

use crate::auth::rbac::Permission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, reusable bundle of permissions assigned to users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Role id
    pub id: Uuid,
    /// Unique role name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Permissions granted by this role
    pub permissions: Vec<Permission>,
    /// Whether the role is listed and assignable
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Build a new role with fresh id and timestamps
    pub fn new(name: String, description: String, permissions: Vec<Permission>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            permissions,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
