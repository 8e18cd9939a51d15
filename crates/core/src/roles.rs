//! Role hierarchy.
//!
//! Roles form a fixed total order for scoped resources:
//! `global_admin` ⊇ `tenant_admin` ⊇ `manager` ⊇ `staff`. A higher role
//! implicitly has every permission of a lower role *within its own
//! tenant/salon*; the cross-tenant bypass of `global_admin` is a separate
//! explicit check in [`crate::permissions`], never inferred from rank.

use serde::{Deserialize, Serialize};

/// Role name as stored in the `users.role` column.
pub const ROLE_GLOBAL_ADMIN: &str = "global_admin";
pub const ROLE_TENANT_ADMIN: &str = "tenant_admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_STAFF: &str = "staff";

/// The acting user's role, resolved per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    GlobalAdmin,
    TenantAdmin,
    Manager,
    Staff,
}

impl Role {
    /// Parse a stored role string. Returns `None` for unknown values so a
    /// corrupted or forged role never silently maps to a real one.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            ROLE_GLOBAL_ADMIN => Some(Role::GlobalAdmin),
            ROLE_TENANT_ADMIN => Some(Role::TenantAdmin),
            ROLE_MANAGER => Some(Role::Manager),
            ROLE_STAFF => Some(Role::Staff),
            _ => None,
        }
    }

    /// The stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::GlobalAdmin => ROLE_GLOBAL_ADMIN,
            Role::TenantAdmin => ROLE_TENANT_ADMIN,
            Role::Manager => ROLE_MANAGER,
            Role::Staff => ROLE_STAFF,
        }
    }

    /// Position in the hierarchy; higher rank subsumes lower within scope.
    pub fn rank(&self) -> u8 {
        match self {
            Role::GlobalAdmin => 3,
            Role::TenantAdmin => 2,
            Role::Manager => 1,
            Role::Staff => 0,
        }
    }

    /// Whether this role meets or exceeds `minimum` in the hierarchy.
    pub fn at_least(&self, minimum: Role) -> bool {
        self.rank() >= minimum.rank()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
