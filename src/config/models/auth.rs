//! Authentication configuration

use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    #[serde(default = "generate_secure_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Token issuer
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Role assigned to self-registered users when none is requested
    #[serde(default = "default_registration_role")]
    pub default_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            issuer: default_issuer(),
            default_role: default_registration_role(),
        }
    }
}

impl AuthConfig {
    /// Build from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(secret) = std::env::var("PANEL_JWT_SECRET") {
            config.jwt_secret = secret;
        }
        config
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err(
                "JWT secret must not use default values. Please generate a secure random secret."
                    .to_string(),
            );
        }

        if self.jwt_expiration == 0 {
            return Err("JWT expiration cannot be 0".to_string());
        }

        if self.default_role.trim().is_empty() {
            return Err("Default registration role cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Warn about insecure but non-fatal auth settings
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.jwt_expiration > 86_400 {
        warn!(
            "JWT expiration of {}s exceeds one day; permission snapshots stay valid that long",
            config.jwt_expiration
        );
    }
}

/// Generate a cryptographically random JWT secret for defaulted configs
fn generate_secure_jwt_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

fn default_jwt_expiration() -> u64 {
    3600
}

fn default_issuer() -> String {
    "rbac-panel".to_string()
}

fn default_registration_role() -> String {
    "Developer".to_string()
}
