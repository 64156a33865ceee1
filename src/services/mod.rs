//! Panel services
//!
//! Services own the lifecycle guards around mutating operations. Every guard
//! is a pure read evaluated before the corresponding write; the storage
//! constraints (unique indexes, RESTRICT foreign key) remain the
//! authoritative backstop under concurrency.

pub mod bootstrap;
pub mod roles;
pub mod users;

pub use roles::{RoleService, RoleUpdate};
pub use users::{UserService, UserUpdate};
