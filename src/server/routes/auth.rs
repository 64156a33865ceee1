//! Authentication endpoints

use crate::auth::LoginOutcome;
use crate::auth::rbac::Permission;
use crate::core::models::UserWithRole;
use crate::server::routes::{ApiResponse, bearer_token};
use crate::server::state::AppState;
use crate::utils::error::PanelError;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Role assigned by name; falls back to the configured default
    pub role_name: Option<String>,
}

/// Login/registration response body
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserInfo,
}

/// Authenticated user summary with its permission snapshot
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<Permission>,
}

impl UserInfo {
    fn from_user(user: &UserWithRole, permissions: Vec<Permission>) -> Self {
        Self {
            id: user.user.id,
            name: user.user.name.clone(),
            email: user.user.email.clone(),
            role: user.role.name.clone(),
            permissions,
        }
    }
}

impl From<LoginOutcome> for AuthResponse {
    fn from(outcome: LoginOutcome) -> Self {
        let user = UserInfo::from_user(&outcome.user, outcome.permissions.clone());
        Self {
            token: outcome.token,
            token_type: "Bearer".to_string(),
            expires_in: outcome.expires_in,
            user,
        }
    }
}

/// User login endpoint
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, PanelError> {
    info!("User login attempt: {}", request.email);

    let outcome = state.auth.login(&request.email, &request.password).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(AuthResponse::from(outcome))))
}

/// Self-registration endpoint
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, PanelError> {
    info!("Registration attempt: {}", request.email);

    let outcome = state
        .auth
        .register(
            &request.name,
            &request.email,
            &request.password,
            request.role_name.as_deref(),
        )
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(AuthResponse::from(outcome))))
}

/// Current user endpoint
pub async fn get_current_user(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, PanelError> {
    let actor = state.auth.authenticate(bearer_token(&req).as_deref())?;
    let user = state.auth.current_user(&actor).await?;

    let permissions: Vec<Permission> = {
        let mut snapshot: Vec<Permission> = actor.permissions.iter().copied().collect();
        snapshot.sort();
        snapshot
    };

    let info = UserInfo::from_user(&user, permissions);
    Ok(HttpResponse::Ok().json(ApiResponse::success(info)))
}

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/register", web::post().to(register))
            .route("/me", web::get().to(get_current_user)),
    );
}
