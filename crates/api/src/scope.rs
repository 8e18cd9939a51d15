//! Per-request tenant/salon scope resolution.
//!
//! Scope is resolved fresh from the database on every scoped request
//! rather than cached in the token, so suspended accounts, role changes,
//! and revoked salon assignments take effect immediately. The role in the
//! JWT claims is only what the user held at token issuance; permission
//! decisions always use the stored role.

use salonflow_core::error::CoreError;
use salonflow_core::roles::Role;
use salonflow_core::scope::{select_active_salon, SalonRef, ScopeContext};
use salonflow_core::types::DbId;
use salonflow_db::models::user::User;
use salonflow_db::repositories::{SalonAccessRepo, UserRepo};
use salonflow_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Load the acting user row and its current role.
///
/// Rejects deactivated accounts. The role comes from the `users` table,
/// not the token, so a demotion applies to the very next request.
async fn load_active_user(pool: &DbPool, auth: &AuthUser) -> AppResult<(User, Role)> {
    let user = UserRepo::find_by_id(pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthenticated("Unknown user".into()))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let role = Role::parse(&user.role).ok_or_else(|| {
        AppError::Core(CoreError::Internal(format!(
            "User {} has unknown stored role '{}'",
            user.id, user.role
        )))
    })?;

    Ok((user, role))
}

/// Resolve the full [`ScopeContext`] for an authenticated user.
///
/// `requested_salon_id` comes from the `X-Salon-Id` header when present.
/// The resolved tenant is always the active salon's tenant, which for a
/// global admin may differ from request to request.
pub async fn resolve_scope(
    pool: &DbPool,
    auth: &AuthUser,
    requested_salon_id: Option<DbId>,
) -> AppResult<ScopeContext> {
    let (user, role) = load_active_user(pool, auth).await?;

    let accessible = SalonAccessRepo::accessible_salons(pool, &user, role).await?;
    let accessible: Vec<SalonRef> = accessible
        .into_iter()
        .map(|s| SalonRef {
            id: s.id,
            tenant_id: s.tenant_id,
            name: s.name,
        })
        .collect();

    let active = select_active_salon(&accessible, requested_salon_id).map_err(AppError::Core)?;

    Ok(ScopeContext {
        user_id: user.id,
        tenant_id: active.tenant_id,
        role,
        salon_id: active.id,
        accessible_salon_ids: accessible.iter().map(|s| s.id).collect(),
    })
}

/// The accessible salons for an authenticated user, without selecting an
/// active one. Used by the `/me/salons` listing.
pub async fn accessible_salons(pool: &DbPool, auth: &AuthUser) -> AppResult<Vec<SalonRef>> {
    let (user, role) = load_active_user(pool, auth).await?;

    let accessible = SalonAccessRepo::accessible_salons(pool, &user, role).await?;
    Ok(accessible
        .into_iter()
        .map(|s| SalonRef {
            id: s.id,
            tenant_id: s.tenant_id,
            name: s.name,
        })
        .collect())
}
