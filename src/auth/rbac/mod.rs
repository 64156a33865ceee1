//! Role-based access control core
//!
//! The permission vocabulary is a closed set; the authorization decision is a
//! pure intersection test over a permission snapshot resolved at
//! authentication time.

mod checks;
mod permissions;
mod types;


pub use checks::{has_any_permission, require_any_permission};
pub use permissions::{Permission, parse_permissions};
pub use types::Actor;
