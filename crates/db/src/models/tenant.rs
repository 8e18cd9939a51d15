//! Tenant entity: the top-level billing/isolation boundary.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salonflow_core::types::{DbId, Timestamp};

/// A row from the `tenants` table.
///
/// Tenants are never hard-deleted; `status` flips to `suspended` instead.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tenant {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub max_salons: i32,
    pub max_users: i32,
    pub max_storage_mb: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tenant {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// DTO for creating a tenant at signup.
#[derive(Debug, Deserialize)]
pub struct CreateTenant {
    pub name: String,
    pub max_salons: Option<i32>,
    pub max_users: Option<i32>,
    pub max_storage_mb: Option<i32>,
}
