//! Staff member entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salonflow_core::types::{DbId, Timestamp};

/// A row from the `staff_members` table. Belongs to exactly one salon
/// (and transitively one tenant).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffMember {
    pub id: DbId,
    pub tenant_id: DbId,
    pub salon_id: DbId,
    /// Linked login account, when the staff member can sign in themselves.
    pub user_id: Option<DbId>,
    pub display_name: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a staff member.
#[derive(Debug, Deserialize)]
pub struct CreateStaffMember {
    pub user_id: Option<DbId>,
    pub display_name: String,
}
