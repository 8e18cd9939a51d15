//! Route definitions for the `/salons` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::salons;
use crate::state::AppState;

/// Routes mounted at `/salons`.
///
/// ```text
/// GET  /                     list tenant's salons
/// POST /                     create salon (tenant admin, quota-checked)
/// PUT  /{salon_id}/hours     update business hours (tenant admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(salons::list_salons).post(salons::create_salon))
        .route("/{salon_id}/hours", put(salons::update_hours))
}
