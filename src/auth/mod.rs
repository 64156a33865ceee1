//! Authentication and authorization system
//!
//! Authentication resolves a bearer credential into an [`rbac::Actor`]
//! holding a permission snapshot. The snapshot is taken when a token is
//! issued; later role edits or deactivation take effect on the actor's next
//! login, not on outstanding tokens.

pub mod jwt;
pub mod password;
pub mod rbac;

use crate::config::AuthConfig;
use crate::core::models::{User, UserWithRole};
use crate::storage::StorageLayer;
use crate::utils::error::{PanelError, Result};
use rbac::{Actor, Permission};
use std::sync::Arc;
use tracing::{info, warn};

/// Main authentication system
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Storage layer for user data
    storage: Arc<StorageLayer>,
    /// JWT handler
    jwt: Arc<jwt::JwtHandler>,
}

/// A successful login or registration
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Issued bearer token
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    /// The authenticated user with role expanded
    pub user: UserWithRole,
    /// Permission snapshot embedded in the token
    pub permissions: Vec<Permission>,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Self {
        info!("Initializing authentication system");

        let jwt = Arc::new(jwt::JwtHandler::new(config));

        Self {
            config: Arc::new(config.clone()),
            storage,
            jwt,
        }
    }

    /// Get the JWT handler
    pub fn jwt(&self) -> &jwt::JwtHandler {
        &self.jwt
    }

    /// Resolve a bearer credential to an actor
    ///
    /// Pure token verification; never consults storage. A missing credential
    /// is an authentication failure, distinct from authorization failures.
    pub fn authenticate(&self, bearer: Option<&str>) -> Result<Actor> {
        let token = bearer.ok_or_else(|| PanelError::auth("Missing bearer token"))?;
        let claims = self.jwt.verify_token(token)?;

        Ok(Actor::new(claims.sub, claims.permissions))
    }

    /// Verify credentials and issue an access token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let user = self
            .storage
            .database
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| PanelError::auth("Invalid credentials"))?;

        if !user.is_active {
            warn!("Login attempt for inactive user: {}", email);
            return Err(PanelError::auth("Account is disabled"));
        }

        if !password::verify_password(password, &user.password_hash)? {
            warn!("Login attempt with invalid password for: {}", email);
            return Err(PanelError::auth("Invalid credentials"));
        }

        if let Err(e) = self.storage.database.update_user_last_login(user.id).await {
            warn!("Failed to update last login time: {}", e);
        }

        self.issue_for(user.id).await
    }

    /// Self-registration with a role resolved by name
    ///
    /// Falls back to the configured default role. The chosen role must
    /// exist; duplicate emails are rejected before any write.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role_name: Option<&str>,
    ) -> Result<LoginOutcome> {
        if self
            .storage
            .database
            .find_user_by_email(email)
            .await?
            .is_some()
        {
            return Err(PanelError::validation("User already exists"));
        }

        let role_name = role_name.unwrap_or(&self.config.default_role);
        let role = self
            .storage
            .database
            .find_role_by_name(role_name)
            .await?
            .ok_or_else(|| PanelError::validation("Invalid role"))?;

        let password_hash = password::hash_password(password)?;
        let user = User::new(
            name.to_string(),
            email.to_string(),
            password_hash,
            role.id,
        );
        let user = self.storage.database.create_user(&user).await?;

        info!("Registered user: {}", user.email);
        self.issue_for(user.id).await
    }

    /// The current actor's user record with role expanded
    pub async fn current_user(&self, actor: &Actor) -> Result<UserWithRole> {
        self.storage
            .database
            .find_user_with_role(actor.user_id)
            .await?
            .ok_or_else(|| PanelError::auth("Unknown user"))
    }

    /// Resolve the permission snapshot for a user and issue a token
    ///
    /// An inactive role grants nothing on re-authentication; outstanding
    /// tokens keep their earlier snapshot until expiry.
    async fn issue_for(&self, user_id: uuid::Uuid) -> Result<LoginOutcome> {
        let user = self
            .storage
            .database
            .find_user_with_role(user_id)
            .await?
            .ok_or_else(|| PanelError::auth("Unknown user"))?;

        let permissions: Vec<Permission> = if user.role.is_active {
            user.role.permissions.clone()
        } else {
            warn!(
                "User {} holds deactivated role {}; issuing empty permission set",
                user.user.email, user.role.name
            );
            vec![]
        };

        let token = self.jwt.create_access_token(
            user.user.id,
            user.role.name.clone(),
            permissions.clone(),
        )?;

        info!("User logged in successfully: {}", user.user.email);

        Ok(LoginOutcome {
            token,
            expires_in: self.jwt.expiration(),
            user,
            permissions,
        })
    }
}
