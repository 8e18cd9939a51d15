//! Route definitions for the `/me` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::me;
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET  /scope                       resolved scope for this request
/// GET  /salons                      accessible salons
/// POST /salons/{salon_id}/select    validate + resolve a salon selection
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scope", get(me::get_scope))
        .route("/salons", get(me::list_salons))
        .route("/salons/{salon_id}/select", post(me::select_salon))
}
