//! User domain model

use super::role::Role;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user account referencing exactly one role
///
/// The role reference is a foreign id; the user does not own the role's
/// lifetime. The password is held only as a one-way hash and is never
/// serialized into responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// User id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique login email
    pub email: String,
    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Referenced role id
    pub role_id: Uuid,
    /// Whether the account may log in
    pub is_active: bool,
    /// Last successful login
    pub last_login_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new active user with fresh id and timestamps
    pub fn new(name: String, email: String, password_hash: String, role_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role_id,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A user with its referenced role expanded
///
/// Every user read on the API surface returns this shape.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithRole {
    /// The user record
    #[serde(flatten)]
    pub user: User,
    /// The referenced role, resolved at read time
    pub role: Role,
}
