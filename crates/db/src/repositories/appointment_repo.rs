//! Repository for the `appointments` table.
//!
//! The scheduling core only reads appointments (for the soft conflict
//! report); bookings are created and mutated by the out-of-scope CRUD
//! surface.

use chrono::NaiveDate;
use sqlx::PgPool;

use salonflow_core::types::DbId;

use crate::models::appointment::Appointment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, salon_id, staff_id, service_id, customer_id, \
                        appt_date, start_time, end_time, status, created_at, updated_at";

/// Provides tenant/salon-scoped read access to appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// List a staff member's non-cancelled appointments in a date range,
    /// ordered by date and start time.
    pub async fn list_by_staff_and_range(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Appointment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments
             WHERE tenant_id = $1 AND salon_id = $2 AND staff_id = $3
               AND appt_date BETWEEN $4 AND $5
               AND status <> 'cancelled'
             ORDER BY appt_date, start_time"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(staff_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
