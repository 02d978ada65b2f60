//! Wire shapes exchanged with the schedule/jobs API.
//!
//! Two sources use different field names for the same concepts: saved
//! timetables use `day_of_week`/`start_time`/`end_time`, job shifts use
//! `day`/`start`/`end`. Both shapes accept either spelling on input.
//!
//! Only the hour component of a time string is consumed; minutes and
//! seconds are ignored.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::TimetableConfig;
use crate::error::{SlotError, TimeParseError};
use crate::models::{Day, Hour, Interval};

/// Label given to job shift intervals.
pub const SHIFT_LABEL: &str = "Work Shift";

/// One saved timetable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Day name ("Monday").
    #[serde(alias = "day")]
    pub day_of_week: String,
    /// Start time, `HH:MM[:SS]`.
    #[serde(alias = "start")]
    pub start_time: String,
    /// End time, `HH:MM[:SS]`.
    #[serde(alias = "end")]
    pub end_time: String,
    /// Activity label; absent means the default label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
}

/// One recurring job shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobShift {
    /// Day name ("Monday").
    #[serde(alias = "day_of_week")]
    pub day: String,
    /// Start time, `HH:MM[:SS]`.
    #[serde(alias = "start_time")]
    pub start: String,
    /// End time, `HH:MM[:SS]`.
    #[serde(alias = "end_time")]
    pub end: String,
}

/// Reads the hour component of `HH:MM` or `HH:MM:SS`.
///
/// `24:00` is accepted as end-of-day.
///
/// # Example
/// ```
/// use u_timetable::interchange::parse_hour;
///
/// assert_eq!(parse_hour("09:30:00"), Ok(9));
/// assert_eq!(parse_hour("9:00"), Ok(9));
/// assert!(parse_hour(":30").is_err());
/// ```
pub fn parse_hour(s: &str) -> Result<Hour, TimeParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimeParseError::Empty);
    }
    if matches!(s, "24:00" | "24:00:00") {
        return Ok(24);
    }
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map(|t| t.hour() as Hour)
        .map_err(|_| TimeParseError::Malformed(s.to_string()))
}

/// Formats a whole-hour boundary as `HH:00`.
pub fn format_hour(hour: Hour) -> String {
    format!("{hour:02}:00")
}

fn parse_span(start: &str, end: &str) -> Result<(Hour, Hour), SlotError> {
    let start = parse_hour(start).map_err(|source| SlotError::Time {
        field: "start",
        source,
    })?;
    let end = parse_hour(end).map_err(|source| SlotError::Time {
        field: "end",
        source,
    })?;
    Ok((start, end))
}

impl ScheduleSlot {
    /// Creates a slot from wire strings.
    pub fn new(
        day_of_week: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            day_of_week: day_of_week.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            activity_type: None,
        }
    }

    /// Sets the activity label.
    pub fn with_activity(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = Some(activity_type.into());
        self
    }

    /// Outbound form of an interval.
    pub fn from_interval(interval: &Interval) -> Self {
        Self {
            day_of_week: interval.day.name().to_string(),
            start_time: format_hour(interval.start),
            end_time: format_hour(interval.end),
            activity_type: Some(interval.label.clone()),
        }
    }

    /// Converts to an interval, labelling with the default when unlabelled.
    pub fn to_interval(&self, config: &TimetableConfig) -> Result<Interval, SlotError> {
        let day: Day = self.day_of_week.parse()?;
        let (start, end) = parse_span(&self.start_time, &self.end_time)?;
        Ok(Interval::new(
            day,
            start,
            end,
            config.label_or_default(self.activity_type.as_deref()),
        ))
    }
}

impl JobShift {
    /// Creates a shift from wire strings.
    pub fn new(day: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Converts to an interval labelled [`SHIFT_LABEL`].
    pub fn to_interval(&self) -> Result<Interval, SlotError> {
        let day: Day = self.day.parse()?;
        let (start, end) = parse_span(&self.start, &self.end)?;
        Ok(Interval::new(day, start, end, SHIFT_LABEL))
    }
}

/// Converts saved slots to intervals, skipping malformed entries.
///
/// One bad record never fails the batch; each skipped slot is logged.
pub fn slots_to_intervals(slots: &[ScheduleSlot], config: &TimetableConfig) -> Vec<Interval> {
    slots
        .iter()
        .filter_map(|slot| match slot.to_interval(config) {
            Ok(interval) => Some(interval),
            Err(e) => {
                warn!(
                    day = %slot.day_of_week,
                    start = %slot.start_time,
                    end = %slot.end_time,
                    error = %e,
                    "skipping malformed schedule slot"
                );
                None
            }
        })
        .collect()
}

/// Converts job shifts to intervals, skipping malformed entries.
pub fn shifts_to_intervals(shifts: &[JobShift]) -> Vec<Interval> {
    shifts
        .iter()
        .filter_map(|shift| match shift.to_interval() {
            Ok(interval) => Some(interval),
            Err(e) => {
                warn!(
                    day = %shift.day,
                    start = %shift.start,
                    end = %shift.end,
                    error = %e,
                    "skipping malformed job shift"
                );
                None
            }
        })
        .collect()
}

/// Parses a JSON array of saved slots.
pub fn slots_from_json(json: &str) -> serde_json::Result<Vec<ScheduleSlot>> {
    serde_json::from_str(json)
}

/// Parses a JSON array of job shifts.
pub fn shifts_from_json(json: &str) -> serde_json::Result<Vec<JobShift>> {
    serde_json::from_str(json)
}
