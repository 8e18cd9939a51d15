pub mod auth;
pub mod health;
pub mod me;
pub mod salons;
pub mod staff;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /me/scope                                        resolved request scope
/// /me/salons                                       accessible salons
/// /me/salons/{id}/select                           salon selection
///
/// /salons                                          list, create (tenant admin)
/// /salons/{id}/hours                               update business hours
///
/// /users                                           create (tenant admin)
///
/// /staff                                           list, create
/// /staff/{id}                                      get, deactivate
/// /staff/{id}/patterns                             weekly patterns CRUD
/// /staff/{id}/shifts                               shifts in range
/// /staff/{id}/shifts/expand                        pattern expansion
/// ```
///
/// All non-auth routes resolve scope per request: the active salon comes
/// from the `X-Salon-Id` header or defaults to the lowest-id accessible
/// salon.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/me", me::router())
        .nest("/salons", salons::router())
        .nest("/users", users::router())
        .nest("/staff", staff::router())
}
