//! Handlers for `/staff/{staff_id}/shifts`: concrete dated shifts and the
//! pattern-expansion endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use salonflow_core::error::CoreError;
use salonflow_core::expansion::DateRange;
use salonflow_core::types::DbId;
use salonflow_db::models::shift::Shift;
use salonflow_db::repositories::{ShiftRepo, StaffRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::scope::Scoped;
use crate::response::DataResponse;
use crate::services::scheduling::{ExpansionOutcome, SchedulingService};
use crate::state::AppState;

/// Query parameters for `GET /staff/{staff_id}/shifts`.
#[derive(Debug, Deserialize)]
pub struct ShiftRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Request body for `POST /staff/{staff_id}/shifts/expand`.
#[derive(Debug, Deserialize)]
pub struct ExpandRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// GET /api/v1/staff/{staff_id}/shifts?from=YYYY-MM-DD&to=YYYY-MM-DD
///
/// List a staff member's shifts in an inclusive date range.
pub async fn list_shifts(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path(staff_id): Path<DbId>,
    Query(query): Query<ShiftRangeQuery>,
) -> AppResult<Json<DataResponse<Vec<Shift>>>> {
    let range = DateRange::new(query.from, query.to).map_err(AppError::Core)?;

    StaffRepo::find_in_salon(&state.pool, scope.tenant_id, scope.salon_id, staff_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("staff member", staff_id)))?;

    let shifts = ShiftRepo::list_by_staff_and_range(
        &state.pool,
        scope.tenant_id,
        scope.salon_id,
        staff_id,
        range.start(),
        range.end(),
    )
    .await?;
    Ok(Json(DataResponse::new(shifts)))
}

/// POST /api/v1/staff/{staff_id}/shifts/expand
///
/// Expand the staff member's weekly patterns into dated shifts over the
/// requested range. Idempotent; requires manager role.
pub async fn expand_shifts(
    State(state): State<AppState>,
    Scoped(scope): Scoped,
    Path(staff_id): Path<DbId>,
    Json(input): Json<ExpandRequest>,
) -> AppResult<Json<DataResponse<ExpansionOutcome>>> {
    let range = DateRange::new(input.start_date, input.end_date).map_err(AppError::Core)?;
    let outcome = SchedulingService::expand_shifts(&state.pool, &scope, staff_id, &range).await?;
    Ok(Json(DataResponse::new(outcome)))
}
