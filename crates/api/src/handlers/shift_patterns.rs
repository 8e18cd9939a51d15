//! Handlers for `/staff/{staff_id}/patterns`: weekly recurring templates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use salonflow_core::error::CoreError;
use salonflow_core::expansion::DAYS_PER_WEEK;
use salonflow_core::hours::validate_time_window;
use salonflow_core::permissions::{allow, Action, Resource};
use salonflow_core::roles::Role;
use salonflow_core::scope::ScopeContext;
use salonflow_core::types::DbId;
use salonflow_db::models::shift_pattern::{CreateShiftPattern, ShiftPattern, UpdateShiftPattern};
use salonflow_db::models::staff::StaffMember;
use salonflow_db::repositories::{ShiftPatternRepo, StaffRepo};
use salonflow_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::scope::Scoped;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/staff/{staff_id}/patterns
pub async fn list_patterns(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path(staff_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ShiftPattern>>>> {
    resolve_staff(&state.pool, &scope, staff_id).await?;
    let patterns =
        ShiftPatternRepo::list_by_staff(&state.pool, scope.tenant_id, scope.salon_id, staff_id)
            .await?;
    Ok(Json(DataResponse::new(patterns)))
}

/// POST /api/v1/staff/{staff_id}/patterns
///
/// Add a weekly pattern. A second pattern on the same day-of-week is
/// rejected; delete or update the existing one instead.
pub async fn create_pattern(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path(staff_id): Path<DbId>,
    Json(input): Json<CreateShiftPattern>,
) -> AppResult<(StatusCode, Json<DataResponse<ShiftPattern>>)> {
    let staff = resolve_staff(&state.pool, &scope, staff_id).await?;
    check_pattern_write(&scope, &staff)?;
    validate_pattern_times(input.day_of_week, input.start_time, input.end_time)?;

    let duplicate = ShiftPatternRepo::exists_for_day(
        &state.pool,
        scope.tenant_id,
        scope.salon_id,
        staff_id,
        input.day_of_week,
    )
    .await?;
    if duplicate {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A pattern already exists for day {}",
            input.day_of_week
        ))));
    }

    let pattern =
        ShiftPatternRepo::create(&state.pool, scope.tenant_id, scope.salon_id, staff_id, &input)
            .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(pattern))))
}

/// PUT /api/v1/staff/{staff_id}/patterns/{pattern_id}
///
/// Change a pattern's time window. Day-of-week is immutable.
pub async fn update_pattern(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path((staff_id, pattern_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateShiftPattern>,
) -> AppResult<Json<DataResponse<ShiftPattern>>> {
    let staff = resolve_staff(&state.pool, &scope, staff_id).await?;
    check_pattern_write(&scope, &staff)?;
    validate_time_window("pattern", input.start_time, input.end_time).map_err(AppError::Core)?;

    let existing =
        ShiftPatternRepo::find_in_salon(&state.pool, scope.tenant_id, scope.salon_id, pattern_id)
            .await?
            .filter(|p| p.staff_id == staff_id)
            .ok_or_else(|| AppError::Core(CoreError::not_found("shift pattern", pattern_id)))?;

    let updated = ShiftPatternRepo::update(
        &state.pool,
        scope.tenant_id,
        scope.salon_id,
        existing.id,
        &input,
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::not_found("shift pattern", pattern_id)))?;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/v1/staff/{staff_id}/patterns/{pattern_id}
pub async fn delete_pattern(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path((staff_id, pattern_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let staff = resolve_staff(&state.pool, &scope, staff_id).await?;
    check_pattern_write(&scope, &staff)?;

    let existing =
        ShiftPatternRepo::find_in_salon(&state.pool, scope.tenant_id, scope.salon_id, pattern_id)
            .await?
            .filter(|p| p.staff_id == staff_id);
    if existing.is_none() {
        return Err(AppError::Core(CoreError::not_found("shift pattern", pattern_id)));
    }

    ShiftPatternRepo::delete(&state.pool, scope.tenant_id, scope.salon_id, pattern_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Ownership check: the staff member must exist in the active salon.
async fn resolve_staff(
    pool: &DbPool,
    scope: &ScopeContext,
    staff_id: DbId,
) -> AppResult<StaffMember> {
    StaffRepo::find_in_salon(pool, scope.tenant_id, scope.salon_id, staff_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("staff member", staff_id)))
}

/// Staff may edit their own patterns; anyone else's require manager rank.
fn check_pattern_write(scope: &ScopeContext, staff: &StaffMember) -> AppResult<()> {
    if !allow(scope.role, Resource::ShiftPatterns, Action::Write) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Insufficient role to edit shift patterns".into(),
        )));
    }
    let own = staff.user_id == Some(scope.user_id);
    if !own && !scope.role.at_least(Role::Manager) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Staff may only edit their own shift patterns".into(),
        )));
    }
    Ok(())
}

fn validate_pattern_times(
    day_of_week: i16,
    start: chrono::NaiveTime,
    end: chrono::NaiveTime,
) -> AppResult<()> {
    if !(0..DAYS_PER_WEEK as i16).contains(&day_of_week) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "day_of_week must be 0 (Sunday) through 6 (Saturday), got {day_of_week}"
        ))));
    }
    validate_time_window("pattern", start, end).map_err(AppError::Core)
}
