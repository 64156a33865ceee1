//! JWT issuance and verification
//!
//! Access tokens carry the actor's permission snapshot, so verification
//! alone is enough to rebuild the actor without touching storage.

use crate::auth::rbac::Permission;
use crate::config::AuthConfig;
use crate::utils::error::{PanelError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use uuid::Uuid;

const TOKEN_AUDIENCE: &str = "panel-api";

/// JWT handler for token operations
#[derive(Clone)]
pub struct JwtHandler {
    /// Encoding key for signing tokens
    encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    decoding_key: DecodingKey,
    /// JWT algorithm
    algorithm: Algorithm,
    /// Token expiration time in seconds
    expiration: u64,
    /// Token issuer
    issuer: String,
}

impl std::fmt::Debug for JwtHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtHandler")
            .field("algorithm", &self.algorithm)
            .field("expiration", &self.expiration)
            .field("issuer", &self.issuer)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// JWT ID
    pub jti: String,
    /// Role name at issuance time
    pub role: String,
    /// Permission snapshot at issuance time
    pub permissions: Vec<Permission>,
}

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
            issuer: config.issuer.clone(),
        }
    }

    /// Create an access token carrying the resolved permission snapshot
    pub fn create_access_token(
        &self,
        user_id: Uuid,
        role: String,
        permissions: Vec<Permission>,
    ) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| PanelError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.expiration,
            iss: self.issuer.clone(),
            aud: TOKEN_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            role,
            permissions,
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(PanelError::Jwt)?;

        debug!("Created access token for user: {}", user_id);
        Ok(token)
    }

    /// Verify an access token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[TOKEN_AUDIENCE]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(PanelError::Jwt)?;

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds
    pub fn expiration(&self) -> u64 {
        self.expiration
    }
}
