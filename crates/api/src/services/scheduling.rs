//! Shift expansion use case: weekly patterns to concrete, dated shifts.

use std::collections::BTreeSet;

use serde::Serialize;

use salonflow_core::error::CoreError;
use salonflow_core::expansion::{
    bookings_outside_windows, plan_expansion, DateRange, WeekPattern,
};
use salonflow_core::permissions::{allow, Action, Resource};
use salonflow_core::scope::ScopeContext;
use salonflow_core::types::DbId;
use salonflow_db::repositories::{AppointmentRepo, ShiftPatternRepo, ShiftRepo, StaffRepo};
use salonflow_db::DbPool;

use crate::error::{is_store_unavailable, AppError, AppResult};

/// Result of one expansion call, returned to the client verbatim.
#[derive(Debug, Serialize, PartialEq)]
pub struct ExpansionOutcome {
    /// Shifts written (created or updated in place) by this call.
    pub generated: u32,
    /// Dates in the range with no pattern coverage.
    pub skipped: u32,
    /// Appointments in the range that no longer fall inside a working
    /// window. Reported, never modified.
    pub orphaned_appointments: Vec<DbId>,
}

/// Orchestrates pattern expansion against the repositories.
pub struct SchedulingService;

impl SchedulingService {
    /// Expand a staff member's weekly patterns over a date range.
    ///
    /// The write itself runs in a single transaction with a per-staff row
    /// lock, so concurrent expansions for the same staff member serialize
    /// rather than interleave. Re-running over the same range is
    /// idempotent: existing rows are updated in place, never duplicated.
    pub async fn expand_shifts(
        pool: &DbPool,
        scope: &ScopeContext,
        staff_id: DbId,
        range: &DateRange,
    ) -> AppResult<ExpansionOutcome> {
        if !allow(scope.role, Resource::Shifts, Action::Write) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Manager role required to expand shifts".into(),
            )));
        }

        StaffRepo::find_in_salon(pool, scope.tenant_id, scope.salon_id, staff_id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("staff member", staff_id)))?;

        let patterns =
            ShiftPatternRepo::list_by_staff(pool, scope.tenant_id, scope.salon_id, staff_id)
                .await?;
        let week = WeekPattern::from_entries(
            patterns
                .iter()
                .map(|p| (p.day_of_week, p.start_time, p.end_time)),
        );

        let counts = ShiftRepo::expand_for_staff(
            pool,
            scope.tenant_id,
            scope.salon_id,
            staff_id,
            range,
            &week,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                // Staff member disappeared between the ownership check and
                // the transaction's FOR UPDATE lock.
                AppError::Core(CoreError::not_found("staff member", staff_id))
            }
            e if is_store_unavailable(&e) => AppError::Core(CoreError::StoreUnavailable),
            e => {
                tracing::error!(staff_id, error = %e, "shift expansion transaction failed");
                AppError::Core(CoreError::ExpansionFailed(Box::new(e)))
            }
        })?;

        let orphaned = Self::conflict_report(pool, scope, staff_id, range, &week).await?;

        tracing::info!(
            staff_id,
            generated = counts.generated,
            skipped = counts.skipped,
            orphaned = orphaned.len(),
            "shift expansion complete"
        );

        Ok(ExpansionOutcome {
            generated: counts.generated,
            skipped: counts.skipped,
            orphaned_appointments: orphaned,
        })
    }

    /// Appointments in the range that fall outside the working windows the
    /// expanded patterns describe. Purely advisory: nothing is cancelled
    /// or moved.
    async fn conflict_report(
        pool: &DbPool,
        scope: &ScopeContext,
        staff_id: DbId,
        range: &DateRange,
        week: &WeekPattern,
    ) -> AppResult<Vec<DbId>> {
        let bookings = AppointmentRepo::list_by_staff_and_range(
            pool,
            scope.tenant_id,
            scope.salon_id,
            staff_id,
            range.start(),
            range.end(),
        )
        .await?
        .iter()
        .map(|a| a.booking_slot())
        .collect::<Vec<_>>();

        // Re-plan against an empty existing set: the plan's windows are
        // what the patterns say the schedule should look like, which is
        // what the report compares bookings against.
        let plan = plan_expansion(range, week, &BTreeSet::new());
        Ok(bookings_outside_windows(&plan, &bookings))
    }
}
