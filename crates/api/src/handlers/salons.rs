//! Handlers for the `/salons` resource (tenant-admin surface).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use salonflow_core::error::CoreError;
use salonflow_core::hours::{validate_time_window, SlotInterval};
use salonflow_core::permissions::{allow, Action, Resource};
use salonflow_core::types::DbId;
use salonflow_db::models::salon::{CreateSalon, Salon, UpdateSalonHours};
use salonflow_db::repositories::{SalonRepo, TenantRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::scope::Scoped;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/salons
///
/// Create a salon in the caller's tenant. Requires tenant-admin role and
/// is rejected once the tenant's salon quota is reached.
pub async fn create_salon(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Json(input): Json<CreateSalon>,
) -> AppResult<(StatusCode, Json<DataResponse<Salon>>)> {
    if !allow(scope.role, Resource::Salons, Action::Write) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Tenant admin role required to manage salons".into(),
        )));
    }

    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Salon name must not be empty".into(),
        )));
    }
    if let (Some(open), Some(close)) = (input.open_time, input.close_time) {
        validate_time_window("business hours", open, close).map_err(AppError::Core)?;
    }
    if let Some(mins) = input.slot_interval_mins {
        SlotInterval::from_minutes(mins).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "{mins} is not a supported slot interval"
            )))
        })?;
    }

    let tenant = TenantRepo::find_by_id(&state.pool, scope.tenant_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("tenant", scope.tenant_id)))?;
    if !tenant.is_active() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Tenant is suspended".into(),
        )));
    }

    let existing = TenantRepo::count_salons(&state.pool, scope.tenant_id).await?;
    if existing >= i64::from(tenant.max_salons) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Salon limit of {} reached for this tenant",
            tenant.max_salons
        ))));
    }

    let salon = SalonRepo::create(&state.pool, scope.tenant_id, &input).await?;
    tracing::info!(salon_id = salon.id, tenant_id = scope.tenant_id, "salon created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(salon))))
}

/// GET /api/v1/salons
///
/// List the caller's tenant's salons.
pub async fn list_salons(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
) -> AppResult<Json<DataResponse<Vec<Salon>>>> {
    let salons = SalonRepo::list_by_tenant(&state.pool, scope.tenant_id).await?;
    Ok(Json(DataResponse::new(salons)))
}

/// PUT /api/v1/salons/{salon_id}/hours
///
/// Update a salon's business hours and booking slot interval.
pub async fn update_hours(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path(salon_id): Path<DbId>,
    Json(input): Json<UpdateSalonHours>,
) -> AppResult<Json<DataResponse<Salon>>> {
    if !allow(scope.role, Resource::Salons, Action::Write) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Tenant admin role required to manage salons".into(),
        )));
    }

    validate_time_window("business hours", input.open_time, input.close_time)
        .map_err(AppError::Core)?;
    SlotInterval::from_minutes(input.slot_interval_mins).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "{} is not a supported slot interval",
            input.slot_interval_mins
        )))
    })?;

    let salon = SalonRepo::update_hours(&state.pool, scope.tenant_id, salon_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("salon", salon_id)))?;

    Ok(Json(DataResponse::new(salon)))
}
