//! Recurring shift expansion planner.
//!
//! Turns a staff member's weekly [`WeekPattern`] into a concrete plan of
//! dated shift writes over an inclusive [`DateRange`]. The planner is
//! pure: it receives the set of already-existing shift dates and decides
//! per date whether to create, update, or skip. Executing the plan (and
//! doing so atomically) is the repository layer's job.
//!
//! Re-planning the same range against unchanged patterns yields the same
//! writes, so repeated expansion is idempotent by construction: a date
//! either has exactly one shift (updated in place) or none. Dates no
//! longer covered by any pattern are skipped, never deleted -- expansion
//! is additive only.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Days per week; day-of-week indexes are `0 = Sunday .. 6 = Saturday`.
pub const DAYS_PER_WEEK: usize = 7;

/// Day-of-week index for a calendar date (`0 = Sunday .. 6 = Saturday`).
///
/// Dates are civil calendar dates in the installation's single operating
/// timezone; no timezone conversion happens anywhere in the core.
pub fn day_of_week(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// An inclusive, validated calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end` before anything touches the
    /// store.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<DateRange, CoreError> {
        if start > end {
            return Err(CoreError::InvalidRange(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every date in the range, both endpoints included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// One day's working window from a weekly pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSlot {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// A staff member's weekly template: at most one slot per day-of-week.
///
/// The backing table has no uniqueness constraint on (staff, day-of-week)
/// for historical reasons; when duplicate rows exist, the last entry read
/// wins. New duplicates are rejected at write time, but rows that predate
/// that check must keep producing the shifts they always produced.
#[derive(Debug, Clone, Default)]
pub struct WeekPattern {
    slots: [Option<PatternSlot>; DAYS_PER_WEEK],
}

impl WeekPattern {
    /// Build from `(day_of_week, start_time, end_time)` entries in read
    /// order. Later entries overwrite earlier ones for the same day.
    /// Entries with a day index outside `0..=6` are ignored.
    pub fn from_entries<I>(entries: I) -> WeekPattern
    where
        I: IntoIterator<Item = (i16, NaiveTime, NaiveTime)>,
    {
        let mut slots: [Option<PatternSlot>; DAYS_PER_WEEK] = Default::default();
        for (day, start_time, end_time) in entries {
            if let Some(slot) = slots.get_mut(day as usize) {
                *slot = Some(PatternSlot {
                    start_time,
                    end_time,
                });
            }
        }
        WeekPattern { slots }
    }

    /// The slot for a day-of-week index, if the pattern covers that day.
    pub fn slot(&self, day: usize) -> Option<&PatternSlot> {
        self.slots.get(day).and_then(|s| s.as_ref())
    }

    /// Whether no day of the week is covered at all.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }
}

/// A single dated shift write the executor must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedShift {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// The full outcome of planning one expansion call.
#[derive(Debug, Clone, Default)]
pub struct ExpansionPlan {
    /// Dates with a pattern slot and no existing shift: insert.
    pub creates: Vec<PlannedShift>,
    /// Dates with a pattern slot and an existing shift: update in place
    /// (times refreshed, status reset to active), never duplicated.
    pub updates: Vec<PlannedShift>,
    /// Count of dates in the range with no pattern slot.
    pub skipped: u32,
}

impl ExpansionPlan {
    /// The counts reported to the caller. `generated` covers both inserts
    /// and in-place updates: it is "dates the pattern materialized",
    /// which is what makes re-runs report the same numbers.
    pub fn counts(&self) -> ExpansionCounts {
        ExpansionCounts {
            generated: (self.creates.len() + self.updates.len()) as u32,
            skipped: self.skipped,
        }
    }

    /// All planned writes, creates first, each group in date order.
    pub fn writes(&self) -> impl Iterator<Item = &PlannedShift> {
        self.creates.iter().chain(self.updates.iter())
    }
}

/// Generated/skipped tally returned by the expansion use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpansionCounts {
    pub generated: u32,
    pub skipped: u32,
}

/// Plan the expansion of `week` over `range`, given the dates that already
/// have a shift row for this staff member.
pub fn plan_expansion(
    range: &DateRange,
    week: &WeekPattern,
    existing_dates: &BTreeSet<NaiveDate>,
) -> ExpansionPlan {
    let mut plan = ExpansionPlan::default();

    for date in range.days() {
        match week.slot(day_of_week(date)) {
            None => plan.skipped += 1,
            Some(slot) => {
                let write = PlannedShift {
                    date,
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                };
                if existing_dates.contains(&date) {
                    plan.updates.push(write);
                } else {
                    plan.creates.push(write);
                }
            }
        }
    }

    plan
}

/// An existing booking, as read from the appointment store.
#[derive(Debug, Clone, Copy)]
pub struct BookingSlot {
    pub appointment_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Bookings that fall outside the shift window the plan will write for
/// their date.
///
/// This is the soft consistency check: appointments are reported, never
/// rejected or mutated, because the legacy data never had the invariant
/// enforced. Bookings on skipped dates are not reported -- their existing
/// shift (if any) is left untouched by the additive-only policy, so the
/// plan says nothing about them.
pub fn bookings_outside_windows(plan: &ExpansionPlan, bookings: &[BookingSlot]) -> Vec<DbId> {
    let mut orphaned = Vec::new();
    for booking in bookings {
        let Some(window) = plan.writes().find(|w| w.date == booking.date) else {
            continue;
        };
        let inside =
            window.start_time <= booking.start_time && booking.end_time <= window.end_time;
        if !inside {
            orphaned.push(booking.appointment_id);
        }
    }
    orphaned
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Weekday;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // -----------------------------------------------------------------------
    // Range validation
    // -----------------------------------------------------------------------

    #[test]
    fn inverted_range_is_invalid() {
        let result = DateRange::new(date(2024, 6, 9), date(2024, 6, 3));
        assert_matches!(result, Err(CoreError::InvalidRange(_)));
    }

    #[test]
    fn single_day_range_is_valid_and_inclusive() {
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 3)).unwrap();
        assert_eq!(range.days().count(), 1);
    }

    #[test]
    fn range_includes_both_endpoints() {
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 6, 3));
        assert_eq!(days[6], date(2024, 6, 9));
    }

    // -----------------------------------------------------------------------
    // Day-of-week mapping
    // -----------------------------------------------------------------------

    #[test]
    fn day_of_week_is_sunday_based() {
        // 2024-06-02 is a Sunday.
        assert_eq!(date(2024, 6, 2).weekday(), Weekday::Sun);
        assert_eq!(day_of_week(date(2024, 6, 2)), 0);
        assert_eq!(day_of_week(date(2024, 6, 3)), 1); // Monday
        assert_eq!(day_of_week(date(2024, 6, 8)), 6); // Saturday
    }

    // -----------------------------------------------------------------------
    // Week pattern construction
    // -----------------------------------------------------------------------

    #[test]
    fn last_entry_wins_for_duplicate_day() {
        let week = WeekPattern::from_entries([
            (1, time(9, 0), time(17, 0)),
            (1, time(10, 0), time(18, 0)),
        ]);
        let slot = week.slot(1).unwrap();
        assert_eq!(slot.start_time, time(10, 0));
        assert_eq!(slot.end_time, time(18, 0));
    }

    #[test]
    fn out_of_range_day_index_is_ignored() {
        let week = WeekPattern::from_entries([(7, time(9, 0), time(17, 0)), (-1, time(9, 0), time(17, 0))]);
        assert!(week.is_empty());
    }

    // -----------------------------------------------------------------------
    // Planning
    // -----------------------------------------------------------------------

    /// Mon 09:00-17:00 over Mon 2024-06-03 .. Sun 2024-06-09.
    #[test]
    fn single_monday_pattern_over_one_week() {
        let week = WeekPattern::from_entries([(1, time(9, 0), time(17, 0))]);
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();

        let plan = plan_expansion(&range, &week, &BTreeSet::new());
        assert_eq!(plan.counts(), ExpansionCounts { generated: 1, skipped: 6 });
        assert_eq!(plan.creates.len(), 1);
        assert!(plan.updates.is_empty());

        let shift = &plan.creates[0];
        assert_eq!(shift.date, date(2024, 6, 3));
        assert_eq!(shift.start_time, time(9, 0));
        assert_eq!(shift.end_time, time(17, 0));
    }

    /// Mon/Wed/Fri over a 14-day range generates exactly
    /// the Mon/Wed/Fri dates and skips the rest.
    #[test]
    fn mon_wed_fri_coverage_over_two_weeks() {
        let week = WeekPattern::from_entries([
            (1, time(9, 0), time(17, 0)),
            (3, time(9, 0), time(17, 0)),
            (5, time(9, 0), time(17, 0)),
        ]);
        // 2024-06-03 (Mon) .. 2024-06-16 (Sun): 14 days, 2 of each weekday.
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 16)).unwrap();

        let plan = plan_expansion(&range, &week, &BTreeSet::new());
        assert_eq!(plan.counts(), ExpansionCounts { generated: 6, skipped: 8 });

        for shift in plan.writes() {
            assert!(matches!(day_of_week(shift.date), 1 | 3 | 5));
        }
    }

    /// Re-planning with the shifts from the first run present produces the
    /// same counts and the same writes, as updates instead of creates.
    #[test]
    fn replanning_is_idempotent() {
        let week = WeekPattern::from_entries([(1, time(9, 0), time(17, 0))]);
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();

        let first = plan_expansion(&range, &week, &BTreeSet::new());
        let existing: BTreeSet<_> = first.writes().map(|w| w.date).collect();
        let second = plan_expansion(&range, &week, &existing);

        assert_eq!(first.counts(), second.counts());
        assert!(second.creates.is_empty());
        assert_eq!(second.updates, first.creates);
    }

    /// Changing the Monday slot and re-running updates the
    /// existing shift in place.
    #[test]
    fn changed_pattern_updates_in_place() {
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();
        let first = plan_expansion(
            &range,
            &WeekPattern::from_entries([(1, time(9, 0), time(17, 0))]),
            &BTreeSet::new(),
        );
        let existing: BTreeSet<_> = first.writes().map(|w| w.date).collect();

        let changed = WeekPattern::from_entries([(1, time(10, 0), time(18, 0))]);
        let second = plan_expansion(&range, &changed, &existing);

        assert_eq!(second.counts().generated, 1);
        assert!(second.creates.is_empty());
        assert_eq!(second.updates[0].start_time, time(10, 0));
        assert_eq!(second.updates[0].end_time, time(18, 0));
    }

    #[test]
    fn empty_pattern_skips_every_date() {
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();
        let plan = plan_expansion(&range, &WeekPattern::default(), &BTreeSet::new());
        assert_eq!(plan.counts(), ExpansionCounts { generated: 0, skipped: 7 });
    }

    /// Existing shifts on dates the pattern no longer covers are not part
    /// of the plan at all (additive-only policy).
    #[test]
    fn uncovered_existing_dates_are_left_alone() {
        let week = WeekPattern::from_entries([(1, time(9, 0), time(17, 0))]);
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();
        // A stale shift on Tuesday from an older pattern.
        let existing: BTreeSet<_> = [date(2024, 6, 4)].into_iter().collect();

        let plan = plan_expansion(&range, &week, &existing);
        assert!(plan.writes().all(|w| w.date != date(2024, 6, 4)));
        assert_eq!(plan.counts().generated, 1);
    }

    // -----------------------------------------------------------------------
    // Soft booking conflict report
    // -----------------------------------------------------------------------

    #[test]
    fn booking_inside_new_window_is_not_reported() {
        let week = WeekPattern::from_entries([(1, time(9, 0), time(17, 0))]);
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();
        let plan = plan_expansion(&range, &week, &BTreeSet::new());

        let bookings = [BookingSlot {
            appointment_id: 11,
            date: date(2024, 6, 3),
            start_time: time(10, 0),
            end_time: time(11, 0),
        }];
        assert!(bookings_outside_windows(&plan, &bookings).is_empty());
    }

    #[test]
    fn booking_outside_shrunk_window_is_reported() {
        let week = WeekPattern::from_entries([(1, time(12, 0), time(17, 0))]);
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();
        let plan = plan_expansion(&range, &week, &BTreeSet::new());

        let bookings = [BookingSlot {
            appointment_id: 11,
            date: date(2024, 6, 3),
            start_time: time(10, 0),
            end_time: time(11, 0),
        }];
        assert_eq!(bookings_outside_windows(&plan, &bookings), vec![11]);
    }

    #[test]
    fn booking_on_skipped_date_is_not_reported() {
        let week = WeekPattern::from_entries([(1, time(9, 0), time(17, 0))]);
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 9)).unwrap();
        let plan = plan_expansion(&range, &week, &BTreeSet::new());

        // Booking on Tuesday -- the plan says nothing about Tuesdays.
        let bookings = [BookingSlot {
            appointment_id: 12,
            date: date(2024, 6, 4),
            start_time: time(10, 0),
            end_time: time(11, 0),
        }];
        assert!(bookings_outside_windows(&plan, &bookings).is_empty());
    }
}
