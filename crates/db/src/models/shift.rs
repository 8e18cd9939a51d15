//! Shift entity: a concrete dated occurrence of a pattern.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;

use salonflow_core::types::{DbId, Timestamp};

/// Shift status values stored in `shifts.status`.
pub const SHIFT_STATUS_ACTIVE: &str = "active";
pub const SHIFT_STATUS_CANCELLED: &str = "cancelled";

/// A row from the `shifts` table.
///
/// At most one shift exists per (staff_id, work_date); the
/// `uq_shifts_staff_date` constraint backs the expander's update-in-place
/// semantics.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shift {
    pub id: DbId,
    pub tenant_id: DbId,
    pub salon_id: DbId,
    pub staff_id: DbId,
    pub work_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
