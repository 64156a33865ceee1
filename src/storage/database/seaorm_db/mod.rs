//! SeaORM database implementation

mod connection;
mod role_ops;
mod types;
mod user_ops;

pub use types::{DatabaseBackendType, SeaOrmDatabase};
