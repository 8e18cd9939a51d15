//! Repository for the `salons` table.

use sqlx::PgPool;

use salonflow_core::types::DbId;

use crate::models::salon::{CreateSalon, Salon, UpdateSalonHours};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, name, status, open_time, close_time, \
                        slot_interval_mins, created_at, updated_at";

/// Provides tenant-scoped CRUD operations for salons.
pub struct SalonRepo;

impl SalonRepo {
    /// Insert a new salon for a tenant, returning the created row.
    ///
    /// Quota enforcement happens in the service layer before this call.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateSalon,
    ) -> Result<Salon, sqlx::Error> {
        let query = format!(
            "INSERT INTO salons (tenant_id, name, open_time, close_time, slot_interval_mins)
             VALUES ($1, $2, COALESCE($3, '09:00'::time), COALESCE($4, '18:00'::time),
                     COALESCE($5, 30))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Salon>(&query)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(input.open_time)
            .bind(input.close_time)
            .bind(input.slot_interval_mins)
            .fetch_one(pool)
            .await
    }

    /// Find a salon by ID within a tenant. A salon in another tenant is
    /// not found.
    pub async fn find_in_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
    ) -> Result<Option<Salon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM salons WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Salon>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .fetch_optional(pool)
            .await
    }

    /// List a tenant's salons ordered by id.
    pub async fn list_by_tenant(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Vec<Salon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM salons WHERE tenant_id = $1 ORDER BY id");
        sqlx::query_as::<_, Salon>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a salon's business-hours configuration.
    ///
    /// Returns `None` if no salon with that id exists in the tenant.
    pub async fn update_hours(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        input: &UpdateSalonHours,
    ) -> Result<Option<Salon>, sqlx::Error> {
        let query = format!(
            "UPDATE salons
             SET open_time = $3, close_time = $4, slot_interval_mins = $5
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Salon>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(input.open_time)
            .bind(input.close_time)
            .bind(input.slot_interval_mins)
            .fetch_optional(pool)
            .await
    }
}
