//! Salon entity: one operating location within a tenant.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use salonflow_core::types::{DbId, Timestamp};

/// A row from the `salons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Salon {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
    pub status: String,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub slot_interval_mins: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A salon the acting user may access; the shape the accessible-salon
/// lookup returns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccessibleSalon {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
}

/// DTO for creating a salon (tenant-admin action, quota-checked).
#[derive(Debug, Deserialize)]
pub struct CreateSalon {
    pub name: String,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub slot_interval_mins: Option<i16>,
}

/// DTO for updating a salon's business-hours configuration.
#[derive(Debug, Deserialize)]
pub struct UpdateSalonHours {
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub slot_interval_mins: i16,
}
