//! Request-scoped identity and salon selection.
//!
//! A [`ScopeContext`] is resolved once per request at the API boundary and
//! passed explicitly into every core operation. Nothing in the core reads
//! ambient session state; that was the legacy system's bug factory.

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// A salon the acting user may access, as returned by the accessible-salon
/// lookup.
#[derive(Debug, Clone, Serialize)]
pub struct SalonRef {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
}

/// Immutable per-request identity: who is acting, in which tenant, against
/// which salon, with which role.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeContext {
    pub user_id: DbId,
    pub tenant_id: DbId,
    pub role: Role,
    /// The currently active salon. Always one of `accessible_salon_ids`.
    pub salon_id: DbId,
    pub accessible_salon_ids: Vec<DbId>,
}

impl ScopeContext {
    /// Whether `salon_id` is in the accessible set.
    pub fn can_access_salon(&self, salon_id: DbId) -> bool {
        self.accessible_salon_ids.contains(&salon_id)
    }
}

/// Pick the active salon from the accessible set.
///
/// A requested salon must be in the set, otherwise the request is
/// `Forbidden` (the user is authenticated but asked for a scope it does
/// not hold). With no request, the accessible salon with the smallest id
/// wins, independent of input ordering, so repeated resolutions are
/// deterministic.
///
/// An empty accessible set is `NoAccessibleSalon` -- never a guessed
/// default. The legacy system silently fell back to salon id 1 here,
/// which handed users a scope they had no claim to.
pub fn select_active_salon(
    accessible: &[SalonRef],
    requested_salon_id: Option<DbId>,
) -> Result<&SalonRef, CoreError> {
    if accessible.is_empty() {
        return Err(CoreError::NoAccessibleSalon);
    }

    match requested_salon_id {
        Some(requested) => accessible
            .iter()
            .find(|s| s.id == requested)
            .ok_or_else(|| CoreError::Forbidden(format!("Salon {requested} is not accessible"))),
        None => Ok(accessible
            .iter()
            .min_by_key(|s| s.id)
            .expect("non-empty set has a minimum")),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn salon(id: DbId, tenant_id: DbId) -> SalonRef {
        SalonRef {
            id,
            tenant_id,
            name: format!("Salon {id}"),
        }
    }

    #[test]
    fn empty_set_is_no_accessible_salon() {
        let result = select_active_salon(&[], None);
        assert_matches!(result, Err(CoreError::NoAccessibleSalon));
    }

    #[test]
    fn defaults_to_smallest_id_regardless_of_order() {
        let salons = vec![salon(9, 1), salon(3, 1), salon(7, 1)];
        let selected = select_active_salon(&salons, None).unwrap();
        assert_eq!(selected.id, 3);
    }

    #[test]
    fn requested_salon_wins_when_accessible() {
        let salons = vec![salon(3, 1), salon(7, 1)];
        let selected = select_active_salon(&salons, Some(7)).unwrap();
        assert_eq!(selected.id, 7);
    }

    #[test]
    fn inaccessible_request_is_forbidden_not_defaulted() {
        let salons = vec![salon(3, 1)];
        let result = select_active_salon(&salons, Some(99));
        assert_matches!(result, Err(CoreError::Forbidden(_)));
    }

    #[test]
    fn can_access_salon_checks_membership() {
        let ctx = ScopeContext {
            user_id: 1,
            tenant_id: 1,
            role: Role::Manager,
            salon_id: 3,
            accessible_salon_ids: vec![3, 7],
        };
        assert!(ctx.can_access_salon(7));
        assert!(!ctx.can_access_salon(99));
    }
}
