//! Appointment entity (read model for the soft conflict check).

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;

use salonflow_core::expansion::BookingSlot;
use salonflow_core::types::{DbId, Timestamp};

/// A row from the `appointments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub tenant_id: DbId,
    pub salon_id: DbId,
    pub staff_id: DbId,
    pub service_id: Option<DbId>,
    pub customer_id: Option<DbId>,
    pub appt_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Appointment {
    /// The shape the expansion conflict check consumes.
    pub fn booking_slot(&self) -> BookingSlot {
        BookingSlot {
            appointment_id: self.id,
            date: self.appt_date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
