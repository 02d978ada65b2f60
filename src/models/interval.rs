//! Recurring weekly busy interval.
//!
//! An interval is either a class block or a job shift block on one day
//! of the week. Hours are plain integers (`0..=24`) because job shifts
//! are not limited to the grid's operating window.

use serde::{Deserialize, Serialize};

use super::{Cell, Day, HourSlot};

/// Hour of day, `0..=24`. End hours are exclusive.
pub type Hour = u8;

/// A recurring busy interval `[start, end)` on a day.
///
/// The source guarantees `end > start` and that intervals of the same set
/// do not overlap each other; neither is re-validated here. An interval
/// with `end <= start` covers no hours and never overlaps anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Day of week.
    pub day: Day,
    /// Start hour (inclusive).
    pub start: Hour,
    /// End hour (exclusive).
    pub end: Hour,
    /// Activity label ("Lecture", "Lab", "Class", ...).
    pub label: String,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(day: Day, start: Hour, end: Hour, label: impl Into<String>) -> Self {
        Self {
            day,
            start,
            end,
            label: label.into(),
        }
    }

    /// One-hour interval covering a single grid cell.
    pub fn from_cell(cell: Cell, label: impl Into<String>) -> Self {
        Self::new(cell.day, cell.slot.hour(), cell.slot.end_hour(), label)
    }

    /// Whether `end > start`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }

    /// Length in hours (zero when malformed).
    #[inline]
    pub fn duration_hours(&self) -> u8 {
        self.end.saturating_sub(self.start)
    }

    /// Whether two intervals share at least one hour.
    ///
    /// Half-open test: `max(starts) < min(ends)`. Intervals on different
    /// days never overlap; malformed intervals never overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.is_well_formed()
            && other.is_well_formed()
            && self.start.max(other.start) < self.end.min(other.end)
    }

    /// Start hours covered by this interval.
    pub fn hours(&self) -> impl Iterator<Item = Hour> {
        self.start..self.end
    }

    /// Grid cells covered by this interval, skipping hours outside the
    /// operating window.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.hours()
            .filter_map(HourSlot::new)
            .map(move |slot| Cell::new(self.day, slot))
    }

    /// Whether every covered hour lies inside the operating window.
    pub fn within_window(&self) -> bool {
        self.hours().all(|h| HourSlot::new(h).is_some())
    }
}
