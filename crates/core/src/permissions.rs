//! Pure permission evaluation.
//!
//! `allow(role, resource, action)` is a total function over closed enums
//! with no I/O; the decision table below is the single source of truth the
//! scattered per-page checks of the legacy system collapsed into.
//!
//! Tenant scoping is a separate dimension: a role is only meaningful
//! inside its own tenant, so callers must pair [`allow`] with
//! [`allow_in_tenant`] (which compares tenant ids, not role strings) on
//! every operation that touches a tenant-owned entity.

use crate::roles::Role;
use crate::types::DbId;

/// Resource kinds permission decisions are made over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Salons,
    Users,
    Staff,
    ShiftPatterns,
    Shifts,
    Appointments,
}

/// Actions on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Write,
}

/// Minimum role required for `(resource, action)` within the caller's own
/// tenant and salon.
///
/// Staff may write their own shift patterns; the "own" restriction is an
/// ownership check the service layer performs on top of this table, since
/// the evaluator deliberately knows nothing about entity ownership.
fn minimum_role(resource: Resource, action: Action) -> Role {
    match (resource, action) {
        (Resource::Salons, Action::Read) => Role::Staff,
        (Resource::Salons, Action::Write) => Role::TenantAdmin,
        (Resource::Users, Action::Read) => Role::Manager,
        (Resource::Users, Action::Write) => Role::TenantAdmin,
        (Resource::Staff, Action::Read) => Role::Staff,
        (Resource::Staff, Action::Write) => Role::Manager,
        (Resource::ShiftPatterns, Action::Read) => Role::Staff,
        (Resource::ShiftPatterns, Action::Write) => Role::Staff,
        (Resource::Shifts, Action::Read) => Role::Staff,
        (Resource::Shifts, Action::Write) => Role::Manager,
        (Resource::Appointments, Action::Read) => Role::Staff,
        (Resource::Appointments, Action::Write) => Role::Staff,
    }
}

/// Decide whether `role` may perform `action` on `resource` inside its own
/// tenant/salon scope.
pub fn allow(role: Role, resource: Resource, action: Action) -> bool {
    role.at_least(minimum_role(resource, action))
}

/// Whether this role carries the administrative cross-tenant override.
///
/// Kept as an explicit, separately-named check so call sites that bypass
/// tenant scoping are grep-able, rather than the bypass being inferred
/// from a role comparison buried in a condition.
pub fn is_global_override(role: Role) -> bool {
    role == Role::GlobalAdmin
}

/// Decide whether an actor bound to `actor_tenant_id` may touch an entity
/// owned by `target_tenant_id`.
///
/// Tenant ids are compared directly: a `tenant_admin` role value is only
/// valid within its own tenant, so a duplicated role string in another
/// tenant grants nothing. Only the explicit global override crosses the
/// boundary.
pub fn allow_in_tenant(role: Role, actor_tenant_id: DbId, target_tenant_id: DbId) -> bool {
    is_global_override(role) || actor_tenant_id == target_tenant_id
}
