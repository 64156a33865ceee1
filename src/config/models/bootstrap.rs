//! Bootstrap seeding configuration

use super::default_true;
use serde::{Deserialize, Serialize};

/// Bootstrap seeding configuration
///
/// Controls the idempotent startup step that ensures baseline roles and an
/// administrative user exist. The seeder only creates what is missing, so
/// these values are read on every start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Whether seeding runs at startup
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Display name for the seeded administrator
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    /// Login email for the seeded administrator
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Initial password for the seeded administrator (hashed before storage)
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            admin_name: default_admin_name(),
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
        }
    }
}

impl BootstrapConfig {
    /// Validate bootstrap configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled {
            if self.admin_email.trim().is_empty() {
                return Err("Bootstrap admin email cannot be empty".to_string());
            }
            if self.admin_password.is_empty() {
                return Err("Bootstrap admin password cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

fn default_admin_name() -> String {
    "System Administrator".to_string()
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}
