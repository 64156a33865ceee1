//! Bootstrap seeding
//!
//! Ensures baseline roles and one administrative user exist. Every step is
//! existence-checked, so the seeder is safe to run on every restart and
//! self-heals after partial completion.

use crate::auth::password::hash_password;
use crate::auth::rbac::Permission;
use crate::config::BootstrapConfig;
use crate::core::models::{Role, User};
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use tracing::{info, warn};

/// Name of the baseline administrative role
pub const ADMIN_ROLE_NAME: &str = "Admin";

/// The fixed baseline role list
fn default_roles() -> Vec<Role> {
    vec![
        Role::new(
            ADMIN_ROLE_NAME.to_string(),
            "Full system access".to_string(),
            Permission::ALL.to_vec(),
        ),
        Role::new(
            "Developer".to_string(),
            "Development team member".to_string(),
            vec![Permission::Create, Permission::Read, Permission::Update],
        ),
        Role::new(
            "Designer".to_string(),
            "Design team member".to_string(),
            vec![Permission::Create, Permission::Read, Permission::Update],
        ),
        Role::new(
            "Tester".to_string(),
            "Quality assurance team member".to_string(),
            vec![Permission::Read, Permission::Update],
        ),
    ]
}

/// Idempotently seed baseline roles and the administrative user
///
/// Invoked once by the process entry point with the storage layer as an
/// explicit argument. Individual role failures are logged and skipped; a
/// later restart retries them.
pub async fn seed_defaults(storage: &StorageLayer, config: &BootstrapConfig) -> Result<()> {
    if !config.enabled {
        info!("Bootstrap seeding disabled");
        return Ok(());
    }

    for role in default_roles() {
        match storage.database.find_role_by_name(&role.name).await? {
            Some(_) => {}
            None => match storage.database.create_role(&role).await {
                Ok(created) => info!("Created role: {}", created.name),
                Err(e) => warn!("Failed to seed role {}: {}", role.name, e),
            },
        }
    }

    seed_admin_user(storage, config).await
}

/// Create the administrative user when absent
async fn seed_admin_user(storage: &StorageLayer, config: &BootstrapConfig) -> Result<()> {
    if storage
        .database
        .find_user_by_email(&config.admin_email)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let Some(admin_role) = storage.database.find_role_by_name(ADMIN_ROLE_NAME).await? else {
        // Role seeding failed earlier this run; the next restart retries.
        warn!("Admin role missing; skipping admin user creation");
        return Ok(());
    };

    let password_hash = hash_password(&config.admin_password)?;
    let admin = User::new(
        config.admin_name.clone(),
        config.admin_email.clone(),
        password_hash,
        admin_role.id,
    );

    storage.database.create_user(&admin).await?;
    info!("Created default admin user: {}", config.admin_email);
    Ok(())
}
