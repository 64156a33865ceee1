//! The closed permission vocabulary

use crate::utils::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An atomic capability token
///
/// The set is fixed at compile time; roles bundle these values and nothing
/// else. Unknown tokens are rejected at the API boundary, not at storage
/// commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create resources
    Create,
    /// Read resources
    Read,
    /// Update resources
    Update,
    /// Delete resources
    Delete,
    /// Manage user accounts
    ManageUsers,
    /// Manage role definitions
    ManageRoles,
}

impl Permission {
    /// Every permission in the vocabulary
    pub const ALL: [Permission; 6] = [
        Permission::Create,
        Permission::Read,
        Permission::Update,
        Permission::Delete,
        Permission::ManageUsers,
        Permission::ManageRoles,
    ];

    /// Wire/storage form of the permission
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Create => "create",
            Permission::Read => "read",
            Permission::Update => "update",
            Permission::Delete => "delete",
            Permission::ManageUsers => "manage_users",
            Permission::ManageRoles => "manage_roles",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create" => Ok(Permission::Create),
            "read" => Ok(Permission::Read),
            "update" => Ok(Permission::Update),
            "delete" => Ok(Permission::Delete),
            "manage_users" => Ok(Permission::ManageUsers),
            "manage_roles" => Ok(Permission::ManageRoles),
            other => Err(PanelError::validation(format!(
                "Unknown permission: {}",
                other
            ))),
        }
    }
}

/// Validate a caller-supplied permission list against the vocabulary
///
/// Duplicates are collapsed; order follows the enum so stored sets stay
/// stable. Any unknown token fails the whole list.
pub fn parse_permissions(tokens: &[String]) -> Result<Vec<Permission>> {
    let mut permissions: Vec<Permission> = tokens
        .iter()
        .map(|token| token.parse())
        .collect::<Result<_>>()?;

    permissions.sort();
    permissions.dedup();
    Ok(permissions)
}
