//! Scope-resolving extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use salonflow_core::error::CoreError;
use salonflow_core::scope::ScopeContext;
use salonflow_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::scope::resolve_scope;
use crate::state::AppState;

/// Header a client sends to act against a specific salon instead of the
/// default (lowest-id accessible) one.
pub const SALON_HEADER: &str = "x-salon-id";

/// Fully resolved request scope: authenticated user, tenant, active salon,
/// and the accessible-salon set.
///
/// ```ignore
/// async fn list_staff(Scoped(scope): Scoped) -> AppResult<Json<Vec<StaffMember>>> {
///     // scope.salon_id is guaranteed accessible to scope.user_id
/// }
/// ```
pub struct Scoped(pub ScopeContext);

impl FromRequestParts<AppState> for Scoped {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let requested: Option<DbId> = match parts.headers.get(SALON_HEADER) {
            Some(value) => {
                let parsed = value
                    .to_str()
                    .ok()
                    .and_then(|v| v.parse::<DbId>().ok())
                    .ok_or_else(|| {
                        AppError::Core(CoreError::Validation(
                            "X-Salon-Id must be a numeric salon id".into(),
                        ))
                    })?;
                Some(parsed)
            }
            None => None,
        };

        let scope = resolve_scope(&state.pool, &auth, requested).await?;
        Ok(Scoped(scope))
    }
}
