//! Salon business-hours and slot-interval rules.

use chrono::NaiveTime;

use crate::error::CoreError;

/// The slot granularities a salon's booking grid may use, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotInterval {
    Min5,
    Min10,
    Min15,
    Min30,
    Min60,
}

impl SlotInterval {
    /// Parse a minute count, rejecting anything outside the fixed enum.
    pub fn from_minutes(minutes: i16) -> Option<SlotInterval> {
        match minutes {
            5 => Some(SlotInterval::Min5),
            10 => Some(SlotInterval::Min10),
            15 => Some(SlotInterval::Min15),
            30 => Some(SlotInterval::Min30),
            60 => Some(SlotInterval::Min60),
            _ => None,
        }
    }

    pub fn minutes(&self) -> i16 {
        match self {
            SlotInterval::Min5 => 5,
            SlotInterval::Min10 => 10,
            SlotInterval::Min15 => 15,
            SlotInterval::Min30 => 30,
            SlotInterval::Min60 => 60,
        }
    }
}

/// Validate a start/end time window: start must be strictly before end.
///
/// Used for salon business hours and for shift pattern slots alike.
pub fn validate_time_window(
    what: &str,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<(), CoreError> {
    if start >= end {
        return Err(CoreError::Validation(format!(
            "{what}: start time {start} must be before end time {end}"
        )));
    }
    Ok(())
}
