//! Handlers for the `/users` resource (tenant-admin provisioning surface).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use salonflow_core::error::CoreError;
use salonflow_core::permissions::{allow, Action, Resource};
use salonflow_core::roles::Role;
use salonflow_core::types::DbId;
use salonflow_db::models::user::{CreateUser, User};
use salonflow_db::repositories::{SalonAccessRepo, SalonRepo, TenantRepo, UserRepo};

use crate::auth::password::{check_password_strength, hash_password};
use crate::error::{AppError, AppResult};
use crate::middleware::scope::Scoped;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    /// Role name; global admin accounts cannot be provisioned here.
    pub role: String,
    /// Salons to assign the new user to, all within the caller's tenant.
    #[serde(default)]
    pub salon_ids: Vec<DbId>,
}

/// POST /api/v1/users
///
/// Create a user account in the caller's tenant. Requires tenant-admin
/// role and is rejected once the tenant's user quota is reached.
pub async fn create_user(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    if !allow(scope.role, Resource::Users, Action::Write) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Tenant admin role required to manage users".into(),
        )));
    }

    let role = Role::parse(&input.role).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "'{}' is not a valid role",
            input.role
        )))
    })?;
    if role == Role::GlobalAdmin {
        return Err(AppError::Core(CoreError::Forbidden(
            "Global admin accounts cannot be provisioned through the tenant API".into(),
        )));
    }

    let email = input.email.trim();
    if email.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email must not be empty".into(),
        )));
    }
    check_password_strength(&input.password).map_err(AppError::Core)?;

    let tenant = TenantRepo::find_by_id(&state.pool, scope.tenant_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("tenant", scope.tenant_id)))?;
    if !tenant.is_active() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Tenant is suspended".into(),
        )));
    }

    let existing = TenantRepo::count_users(&state.pool, scope.tenant_id).await?;
    if existing >= i64::from(tenant.max_users) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "User limit of {} reached for this tenant",
            tenant.max_users
        ))));
    }

    // Every requested salon must exist in the caller's own tenant; an id
    // from another tenant is indistinguishable from a missing one.
    for salon_id in &input.salon_ids {
        SalonRepo::find_in_tenant(&state.pool, scope.tenant_id, *salon_id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("salon", *salon_id)))?;
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            tenant_id: Some(scope.tenant_id),
            email: email.to_string(),
            password_hash: hashed,
            role: role.as_str().to_string(),
        },
    )
    .await?;

    for salon_id in &input.salon_ids {
        SalonAccessRepo::grant(&state.pool, user.id, *salon_id).await?;
    }

    tracing::info!(user_id = user.id, tenant_id = scope.tenant_id, role = %role, "user created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(user))))
}
