//! Shift pattern entity: a staff member's weekly recurring template.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salonflow_core::types::{DbId, Timestamp};

/// A row from the `shift_patterns` table.
///
/// `day_of_week` is `0 = Sunday .. 6 = Saturday`. The table has no
/// uniqueness on (staff_id, day_of_week); see the expansion planner's
/// last-wins rule for how duplicate legacy rows are resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShiftPattern {
    pub id: DbId,
    pub tenant_id: DbId,
    pub salon_id: DbId,
    pub staff_id: DbId,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a pattern.
#[derive(Debug, Deserialize)]
pub struct CreateShiftPattern {
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// DTO for updating a pattern's times (day-of-week is immutable; delete
/// and recreate to move a pattern to another day).
#[derive(Debug, Deserialize)]
pub struct UpdateShiftPattern {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
