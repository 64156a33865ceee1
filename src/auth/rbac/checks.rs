//! Authorization decision procedure

use super::permissions::Permission;
use super::types::Actor;
use crate::utils::error::{PanelError, Result};

/// ANY-of authorization check
///
/// Grants access when the actor's permission set intersects the required
/// set. Pure and side-effect free; never consults storage.
pub fn has_any_permission(actor: &Actor, required: &[Permission]) -> bool {
    required.iter().any(|perm| actor.permissions.contains(perm))
}

/// Authorization gate for mutating handlers
///
/// Returns a forbidden error naming the missing permissions when the
/// intersection is empty.
pub fn require_any_permission(actor: &Actor, required: &[Permission]) -> Result<()> {
    if has_any_permission(actor, required) {
        return Ok(());
    }

    let wanted: Vec<&str> = required.iter().map(|p| p.as_str()).collect();
    Err(PanelError::forbidden(format!(
        "Missing permission: {}",
        wanted.join(", ")
    )))
}
