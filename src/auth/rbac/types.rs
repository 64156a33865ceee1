//! RBAC type definitions

use super::permissions::Permission;
use std::collections::HashSet;
use uuid::Uuid;

/// The resolved identity behind an authenticated request
///
/// Built from verified JWT claims; the permission set is the snapshot taken
/// when the token was issued and is never re-read from storage during the
/// request.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Authenticated user id
    pub user_id: Uuid,
    /// Permission snapshot resolved at authentication time
    pub permissions: HashSet<Permission>,
}

impl Actor {
    /// Create an actor from a resolved permission snapshot
    pub fn new(user_id: Uuid, permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            user_id,
            permissions: permissions.into_iter().collect(),
        }
    }
}
