//! Route definitions for the `/users` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /    create user (tenant admin, quota-checked)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(users::create_user))
}
