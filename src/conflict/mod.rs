//! Class/shift schedule conflict analysis.
//!
//! Compares a student's class intervals against a job's shift intervals,
//! day by day, and pairs the result with a headline derived from the
//! job's advisory messages.
//!
//! # Algorithm
//! 1. Group both lists by day.
//! 2. For each day in week order, drop it if it has neither classes nor
//!    shifts; otherwise it is a conflict iff some class and some shift
//!    satisfy `max(c.start, s.start) < min(c.end, s.end)`.
//! 3. Emit the surviving days in week order.
//!
//! The headline ([`Headline`]) is computed from external advisory strings
//! and is independent of the day verdicts; the two may disagree.
//!
//! Malformed intervals (`end <= start`) are listed but never contribute
//! to a conflict.

mod headline;

pub use headline::{Headline, JobFit};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::TimetableConfig;
use crate::interchange::{shifts_to_intervals, slots_to_intervals, JobShift, ScheduleSlot};
use crate::models::{Day, Interval};

/// Day-level verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayVerdict {
    /// Classes and shifts coexist with no shared hour.
    Fits,
    /// At least one class and one shift share an hour.
    Conflict,
}

impl DayVerdict {
    /// Display text.
    pub fn label(self) -> &'static str {
        match self {
            DayVerdict::Fits => "Fits Schedule",
            DayVerdict::Conflict => "Direct Time Conflict",
        }
    }
}

impl fmt::Display for DayVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classes and shifts of one day with their verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayComparison {
    pub day: Day,
    /// Class intervals on this day, input order.
    pub classes: Vec<Interval>,
    /// Shift intervals on this day, input order.
    pub shifts: Vec<Interval>,
    pub verdict: DayVerdict,
}

impl DayComparison {
    /// Whether this day has a direct time conflict.
    pub fn has_conflict(&self) -> bool {
        self.verdict == DayVerdict::Conflict
    }

    /// Class/shift pairs that share an hour.
    pub fn overlapping_pairs(&self) -> Vec<(&Interval, &Interval)> {
        self.classes
            .iter()
            .flat_map(|c| {
                self.shifts
                    .iter()
                    .filter(move |s| c.overlaps(s))
                    .map(move |s| (c, s))
            })
            .collect()
    }
}

/// Per-day comparison of a class list against a shift list.
///
/// # Example
/// ```
/// use u_timetable::conflict::{DayVerdict, ScheduleComparison};
/// use u_timetable::models::{Day, Interval};
///
/// let classes = [Interval::new(Day::Monday, 9, 11, "Lecture")];
/// let shifts = [Interval::new(Day::Monday, 10, 12, "Work Shift")];
///
/// let cmp = ScheduleComparison::compare(&classes, &shifts);
/// assert_eq!(cmp.days.len(), 1);
/// assert_eq!(cmp.days[0].verdict, DayVerdict::Conflict);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleComparison {
    /// Days with at least one class or shift, week order.
    pub days: Vec<DayComparison>,
}

impl ScheduleComparison {
    /// Compares classes against shifts.
    pub fn compare(classes: &[Interval], shifts: &[Interval]) -> Self {
        let days = Day::ALL
            .into_iter()
            .filter_map(|day| compare_day(day, classes, shifts))
            .collect();
        Self { days }
    }

    /// Compares wire-format inputs, skipping malformed entries.
    pub fn compare_wire(
        slots: &[ScheduleSlot],
        shifts: &[JobShift],
        config: &TimetableConfig,
    ) -> Self {
        let classes = slots_to_intervals(slots, config);
        let shifts = shifts_to_intervals(shifts);
        Self::compare(&classes, &shifts)
    }

    /// Whether there is nothing to compare.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether any day has a conflict.
    pub fn has_conflict(&self) -> bool {
        self.days.iter().any(DayComparison::has_conflict)
    }

    /// Days with a conflict, week order.
    pub fn conflicting_days(&self) -> Vec<Day> {
        self.days
            .iter()
            .filter(|d| d.has_conflict())
            .map(|d| d.day)
            .collect()
    }

    /// Comparison for one day, if present.
    pub fn day(&self, day: Day) -> Option<&DayComparison> {
        self.days.iter().find(|d| d.day == day)
    }
}

/// Builds one day's comparison, or `None` if the day is empty.
fn compare_day(day: Day, classes: &[Interval], shifts: &[Interval]) -> Option<DayComparison> {
    let classes: Vec<Interval> = classes.iter().filter(|c| c.day == day).cloned().collect();
    let shifts: Vec<Interval> = shifts.iter().filter(|s| s.day == day).cloned().collect();

    if classes.is_empty() && shifts.is_empty() {
        return None;
    }

    let verdict = if has_overlap(&classes, &shifts) {
        DayVerdict::Conflict
    } else {
        DayVerdict::Fits
    };

    Some(DayComparison {
        day,
        classes,
        shifts,
        verdict,
    })
}

/// Whether any interval of `a` shares an hour with any interval of `b`.
pub fn has_overlap(a: &[Interval], b: &[Interval]) -> bool {
    a.iter().any(|x| b.iter().any(|y| x.overlaps(y)))
}
