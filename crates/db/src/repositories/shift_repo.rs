//! Repository for the `shifts` table, including the transactional
//! expansion executor.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use sqlx::PgPool;

use salonflow_core::expansion::{plan_expansion, DateRange, ExpansionCounts, WeekPattern};
use salonflow_core::types::DbId;

use crate::models::shift::Shift;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, salon_id, staff_id, work_date, start_time, \
                        end_time, status, created_at, updated_at";

/// Provides tenant/salon-scoped operations for concrete shifts.
pub struct ShiftRepo;

impl ShiftRepo {
    /// List a staff member's shifts in a date range, ordered by date.
    pub async fn list_by_staff_and_range(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Shift>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shifts
             WHERE tenant_id = $1 AND salon_id = $2 AND staff_id = $3
               AND work_date BETWEEN $4 AND $5
             ORDER BY work_date"
        );
        sqlx::query_as::<_, Shift>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(staff_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Find the shift for a staff member on a specific date, if any.
    pub async fn find_by_staff_and_date(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
        work_date: NaiveDate,
    ) -> Result<Option<Shift>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shifts
             WHERE tenant_id = $1 AND salon_id = $2 AND staff_id = $3 AND work_date = $4"
        );
        sqlx::query_as::<_, Shift>(&query)
            .bind(tenant_id)
            .bind(salon_id)
            .bind(staff_id)
            .bind(work_date)
            .fetch_optional(pool)
            .await
    }

    /// Materialize `week` over `range` for one staff member, atomically.
    ///
    /// The whole expansion is a single transaction:
    ///
    /// 1. Lock the staff row `FOR UPDATE`. Two concurrent expansions for
    ///    the same staff member serialize on this lock, so their
    ///    insert/update decisions cannot interleave; expansions for other
    ///    staff proceed in parallel.
    /// 2. Re-read the dates that already have a shift, inside the
    ///    transaction (the lock makes this read stable).
    /// 3. Plan via [`plan_expansion`] and apply: covered dates with an
    ///    existing shift are updated in place (times refreshed, status
    ///    reset to active), covered dates without one are inserted,
    ///    uncovered dates are untouched.
    ///
    /// Any failure rolls back every write in the call; partial generation
    /// is never observable.
    pub async fn expand_for_staff(
        pool: &PgPool,
        tenant_id: DbId,
        salon_id: DbId,
        staff_id: DbId,
        range: &DateRange,
        week: &WeekPattern,
    ) -> Result<ExpansionCounts, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Per-staff serialization lock; also re-verifies the staff member
        // is still in scope. RowNotFound aborts the transaction.
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM staff_members
             WHERE tenant_id = $1 AND salon_id = $2 AND id = $3
             FOR UPDATE",
        )
        .bind(tenant_id)
        .bind(salon_id)
        .bind(staff_id)
        .fetch_one(&mut *tx)
        .await?;

        let existing_dates: BTreeSet<NaiveDate> = sqlx::query_scalar(
            "SELECT work_date FROM shifts
             WHERE tenant_id = $1 AND salon_id = $2 AND staff_id = $3
               AND work_date BETWEEN $4 AND $5",
        )
        .bind(tenant_id)
        .bind(salon_id)
        .bind(staff_id)
        .bind(range.start())
        .bind(range.end())
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .collect();

        let plan = plan_expansion(range, week, &existing_dates);

        for shift in &plan.creates {
            sqlx::query(
                "INSERT INTO shifts
                     (tenant_id, salon_id, staff_id, work_date, start_time, end_time, status)
                 VALUES ($1, $2, $3, $4, $5, $6, 'active')",
            )
            .bind(tenant_id)
            .bind(salon_id)
            .bind(staff_id)
            .bind(shift.date)
            .bind(shift.start_time)
            .bind(shift.end_time)
            .execute(&mut *tx)
            .await?;
        }

        for shift in &plan.updates {
            sqlx::query(
                "UPDATE shifts
                 SET start_time = $5, end_time = $6, status = 'active'
                 WHERE tenant_id = $1 AND salon_id = $2 AND staff_id = $3 AND work_date = $4",
            )
            .bind(tenant_id)
            .bind(salon_id)
            .bind(staff_id)
            .bind(shift.date)
            .bind(shift.start_time)
            .bind(shift.end_time)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(plan.counts())
    }
}
