//! Handlers for the `/staff` resource, scoped to the active salon.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use salonflow_core::error::CoreError;
use salonflow_core::permissions::{allow, Action, Resource};
use salonflow_core::types::DbId;
use salonflow_db::models::staff::{CreateStaffMember, StaffMember};
use salonflow_db::repositories::StaffRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::scope::Scoped;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/staff
///
/// List staff members of the active salon, ordered by display name.
pub async fn list_staff(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
) -> AppResult<Json<DataResponse<Vec<StaffMember>>>> {
    let staff = StaffRepo::list_by_salon(&state.pool, scope.tenant_id, scope.salon_id).await?;
    Ok(Json(DataResponse::new(staff)))
}

/// GET /api/v1/staff/{staff_id}
pub async fn get_staff(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path(staff_id): Path<DbId>,
) -> AppResult<Json<DataResponse<StaffMember>>> {
    let staff = StaffRepo::find_in_salon(&state.pool, scope.tenant_id, scope.salon_id, staff_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("staff member", staff_id)))?;
    Ok(Json(DataResponse::new(staff)))
}

/// POST /api/v1/staff
///
/// Create a staff member in the active salon. Requires manager role.
pub async fn create_staff(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Json(input): Json<CreateStaffMember>,
) -> AppResult<(StatusCode, Json<DataResponse<StaffMember>>)> {
    if !allow(scope.role, Resource::Staff, Action::Write) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Manager role required to manage staff".into(),
        )));
    }
    if input.display_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Display name must not be empty".into(),
        )));
    }

    let staff = StaffRepo::create(&state.pool, scope.tenant_id, scope.salon_id, &input).await?;
    tracing::info!(staff_id = staff.id, salon_id = scope.salon_id, "staff member created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(staff))))
}

/// DELETE /api/v1/staff/{staff_id}
///
/// Soft-deactivate a staff member. Requires manager role. Shifts and
/// patterns stay in place for history.
pub async fn deactivate_staff(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path(staff_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !allow(scope.role, Resource::Staff, Action::Write) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Manager role required to manage staff".into(),
        )));
    }

    let deactivated =
        StaffRepo::deactivate(&state.pool, scope.tenant_id, scope.salon_id, staff_id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::not_found("staff member", staff_id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
