//! User account entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salonflow_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `tenant_id` is `None` only for `global_admin` accounts; a DB check
/// constraint enforces this.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub tenant_id: Option<DbId>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub tenant_id: Option<DbId>,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
