//! Handlers for the `/me` resource: the current user's scope and salons.

use axum::extract::{Path, State};
use axum::Json;
use salonflow_core::scope::{SalonRef, ScopeContext};
use salonflow_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::scope::Scoped;
use crate::response::DataResponse;
use crate::scope;
use crate::state::AppState;

/// GET /api/v1/me/scope
///
/// The fully resolved scope for this request: active salon, tenant, role,
/// and the accessible-salon set. Honors `X-Salon-Id`.
pub async fn get_scope(Scoped(ctx): Scoped) -> AppResult<Json<DataResponse<ScopeContext>>> {
    Ok(Json(DataResponse::new(ctx)))
}

/// GET /api/v1/me/salons
///
/// Every salon the authenticated user may act against, ordered by id.
pub async fn list_salons(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<SalonRef>>>> {
    let salons = scope::accessible_salons(&state.pool, &auth).await?;
    Ok(Json(DataResponse::new(salons)))
}

/// POST /api/v1/me/salons/{salon_id}/select
///
/// Validate that the salon is accessible and return the scope that results
/// from selecting it. Scope itself is stateless: clients persist the choice
/// by sending `X-Salon-Id` on subsequent requests.
pub async fn select_salon(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(salon_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ScopeContext>>> {
    let ctx = scope::resolve_scope(&state.pool, &auth, Some(salon_id)).await?;
    Ok(Json(DataResponse::new(ctx)))
}
