//! Repository for the `staff_members` table.

use sqlx::PgPool;

use salonflow_core::types::DbId;

use crate::models::staff::{CreateStaffMember, StaffMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, salon_id, user_id, display_name, status, \
                        created_at, updated_at";

/// Provides tenant/salon-scoped CRUD operations for staff members.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        input: &CreateStaffMember,
    ) -> Result<StaffMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff_members (tenant_id, salon_id, user_id, display_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(input.user_id)
            .bind(&input.display_name)
            .fetch_one(pool)
            .await
    }

    /// Find a staff member by ID within a tenant and salon.
    ///
    /// A syntactically valid staff id belonging to another salon or
    /// tenant is not found -- this is the ownership check every mutating
    /// use case performs before touching data.
    pub async fn find_in_salon(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
    ) -> Result<Option<StaffMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff_members
             WHERE tenant_id = $1 AND salon_id = $2 AND id = $3"
        );
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(staff_id)
            .fetch_optional(pool)
            .await
    }

    /// List a salon's staff members ordered by display name.
    pub async fn list_by_salon(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
    ) -> Result<Vec<StaffMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff_members
             WHERE tenant_id = $1 AND salon_id = $2
             ORDER BY display_name, id"
        );
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .fetch_all(pool)
            .await
    }

    /// Soft-deactivate a staff member. Returns `true` if the row was updated.
    pub async fn deactivate(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE staff_members SET status = 'inactive'
             WHERE tenant_id = $1 AND salon_id = $2 AND id = $3 AND status = 'active'",
        )
        .bind(tenant_id)
        .bind(salon_id)
        .bind(staff_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
