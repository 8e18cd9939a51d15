//! Repository for the `shift_patterns` table.

use sqlx::PgPool;

use salonflow_core::types::DbId;

use crate::models::shift_pattern::{CreateShiftPattern, ShiftPattern, UpdateShiftPattern};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, salon_id, staff_id, day_of_week, \
                        start_time, end_time, created_at, updated_at";

/// Provides tenant/salon-scoped CRUD operations for shift patterns.
pub struct ShiftPatternRepo;

impl ShiftPatternRepo {
    /// List a staff member's patterns in insertion order.
    ///
    /// Read order matters: when legacy duplicate rows share a day-of-week,
    /// the expansion planner resolves them last-wins, so this must return
    /// rows oldest-first.
    pub async fn list_by_staff(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
    ) -> Result<Vec<ShiftPattern>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shift_patterns
             WHERE tenant_id = $1 AND salon_id = $2 AND staff_id = $3
             ORDER BY id"
        );
        sqlx::query_as::<_, ShiftPattern>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(staff_id)
            .fetch_all(pool)
            .await
    }

    /// Find a pattern by ID within a tenant and salon.
    pub async fn find_in_salon(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        pattern_id: DbId,
    ) -> Result<Option<ShiftPattern>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shift_patterns
             WHERE tenant_id = $1 AND salon_id = $2 AND id = $3"
        );
        sqlx::query_as::<_, ShiftPattern>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(pattern_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the staff member already has a pattern for a day-of-week.
    ///
    /// Used by the API layer to reject new duplicates at write time while
    /// pre-existing duplicate rows keep their last-wins behavior.
    pub async fn exists_for_day(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
        day_of_week: i16,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM shift_patterns
             WHERE tenant_id = $1 AND salon_id = $2 AND staff_id = $3 AND day_of_week = $4",
        )
        .bind(tenant_id)
        .bind(salon_id)
        .bind(staff_id)
        .bind(day_of_week)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }

    /// Insert a new pattern, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
        input: &CreateShiftPattern,
    ) -> Result<ShiftPattern, sqlx::Error> {
        let query = format!(
            "INSERT INTO shift_patterns
                 (tenant_id, salon_id, staff_id, day_of_week, start_time, end_time)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShiftPattern>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(staff_id)
            .bind(input.day_of_week)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// Update a pattern's time window.
    ///
    /// Returns `None` if no pattern with that id exists in the scope.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        pattern_id: DbId,
        input: &UpdateShiftPattern,
    ) -> Result<Option<ShiftPattern>, sqlx::Error> {
        let query = format!(
            "UPDATE shift_patterns
             SET start_time = $4, end_time = $5
             WHERE tenant_id = $1 AND salon_id = $2 AND id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShiftPattern>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(pattern_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pattern. Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        pattern_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM shift_patterns
             WHERE tenant_id = $1 AND salon_id = $2 AND id = $3",
        )
        .bind(tenant_id)
        .bind(salon_id)
        .bind(pattern_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
