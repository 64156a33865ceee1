//! User management endpoints

use crate::auth::rbac::{Permission, require_any_permission};
use crate::server::routes::{ApiResponse, bearer_token};
use crate::server::state::AppState;
use crate::services::UserUpdate;
use crate::utils::error::PanelError;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

/// User creation request body
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: Uuid,
}

/// User update request body
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

/// List users with roles expanded
pub async fn list_users(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, PanelError> {
    let actor = state.auth.authenticate(bearer_token(&req).as_deref())?;
    require_any_permission(&actor, &[Permission::ManageUsers])?;

    let users = state.users.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(users)))
}

/// Create a user
pub async fn create_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, PanelError> {
    let actor = state.auth.authenticate(bearer_token(&req).as_deref())?;
    require_any_permission(&actor, &[Permission::ManageUsers])?;

    let user = state
        .users
        .create(
            &request.name,
            &request.email,
            &request.password,
            request.role_id,
        )
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(user)))
}

/// Update a user
pub async fn update_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, PanelError> {
    let actor = state.auth.authenticate(bearer_token(&req).as_deref())?;
    require_any_permission(&actor, &[Permission::ManageUsers])?;

    let request = request.into_inner();
    let fields = UserUpdate {
        name: request.name,
        email: request.email,
        role_id: request.role_id,
        is_active: request.is_active,
    };

    let user = state.users.update(path.into_inner(), fields).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}

/// Delete a user
pub async fn delete_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, PanelError> {
    let actor = state.auth.authenticate(bearer_token(&req).as_deref())?;
    require_any_permission(&actor, &[Permission::ManageUsers])?;

    state.users.delete(path.into_inner(), actor.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("User deleted successfully")))
}

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}
