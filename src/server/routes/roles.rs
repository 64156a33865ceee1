//! Role management endpoints

use crate::auth::rbac::{Permission, require_any_permission};
use crate::server::routes::{ApiResponse, bearer_token};
use crate::server::state::AppState;
use crate::services::RoleUpdate;
use crate::utils::error::PanelError;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

/// Role creation request body
#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Role update request body
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// List active roles
///
/// Requires only a valid actor; listing roles is deliberately not gated on
/// `manage_roles`.
pub async fn list_roles(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, PanelError> {
    let _actor = state.auth.authenticate(bearer_token(&req).as_deref())?;

    let roles = state.roles.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(roles)))
}

/// Create a role
pub async fn create_role(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<CreateRoleRequest>,
) -> Result<HttpResponse, PanelError> {
    let actor = state.auth.authenticate(bearer_token(&req).as_deref())?;
    require_any_permission(&actor, &[Permission::ManageRoles])?;

    let role = state
        .roles
        .create(&request.name, &request.description, &request.permissions)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(role)))
}

/// Update a role
pub async fn update_role(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    request: web::Json<UpdateRoleRequest>,
) -> Result<HttpResponse, PanelError> {
    let actor = state.auth.authenticate(bearer_token(&req).as_deref())?;
    require_any_permission(&actor, &[Permission::ManageRoles])?;

    let request = request.into_inner();
    let fields = RoleUpdate {
        name: request.name,
        description: request.description,
        permissions: request.permissions,
        is_active: request.is_active,
    };

    let role = state.roles.update(path.into_inner(), fields).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(role)))
}

/// Delete a role
pub async fn delete_role(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, PanelError> {
    let actor = state.auth.authenticate(bearer_token(&req).as_deref())?;
    require_any_permission(&actor, &[Permission::ManageRoles])?;

    state.roles.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Role deleted successfully")))
}

/// Configure role routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/roles")
            .route("", web::get().to(list_roles))
            .route("", web::post().to(create_role))
            .route("/{id}", web::put().to(update_role))
            .route("/{id}", web::delete().to(delete_role)),
    );
}
