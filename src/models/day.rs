//! Week days, hour slots, and grid cells.
//!
//! # Time Model
//! The week is seven symbolic days in conventional order (Monday first).
//! Within a day, time is hour-granular. The editable grid only covers the
//! operating window: start hours 09 through 21 inclusive, each slot spanning
//! `[h, h + 1)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First start hour representable in the grid.
pub const FIRST_HOUR: u8 = 9;
/// Last start hour representable in the grid.
pub const LAST_HOUR: u8 = 21;
/// Number of hour slots per day (13).
pub const SLOTS_PER_DAY: usize = (LAST_HOUR - FIRST_HOUR + 1) as usize;

/// A day of the week.
///
/// Ordered Monday..Sunday. Used as a grouping key only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Full English name, as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Three-letter column header ("Mon", "Tue", ...).
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    /// Zero-based position in the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at a zero-based week position.
    pub fn from_index(index: usize) -> Option<Day> {
        Day::ALL.get(index).copied()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a day name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day of week: {0:?}")]
pub struct UnknownDay(pub String);

impl FromStr for Day {
    type Err = UnknownDay;

    /// Accepts full names and three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_ascii_lowercase();
                lower == name || lower == name[..3]
            })
            .ok_or_else(|| UnknownDay(trimmed.to_string()))
    }
}

/// An hour-of-day inside the operating window.
///
/// The slot covers `[hour, hour + 1)`. Values outside
/// [`FIRST_HOUR`]..=[`LAST_HOUR`] cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct HourSlot(u8);

impl HourSlot {
    /// Creates a slot, or `None` if the hour is outside the window.
    pub fn new(hour: u8) -> Option<Self> {
        (FIRST_HOUR..=LAST_HOUR).contains(&hour).then_some(Self(hour))
    }

    /// Start hour.
    #[inline]
    pub fn hour(self) -> u8 {
        self.0
    }

    /// Exclusive end hour (`hour + 1`).
    #[inline]
    pub fn end_hour(self) -> u8 {
        self.0 + 1
    }

    /// Every slot of the window, earliest first.
    pub fn all() -> impl Iterator<Item = HourSlot> {
        (FIRST_HOUR..=LAST_HOUR).map(HourSlot)
    }
}

impl From<HourSlot> for u8 {
    fn from(slot: HourSlot) -> u8 {
        slot.0
    }
}

impl fmt::Display for HourSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// One editable grid cell: a day and an hour slot.
///
/// Ordered by day, then hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    pub day: Day,
    pub slot: HourSlot,
}

impl Cell {
    /// Creates a cell.
    pub fn new(day: Day, slot: HourSlot) -> Self {
        Self { day, slot }
    }

    /// Maps raw host coordinates (week index, hour) to a cell.
    ///
    /// Returns `None` when the coordinates fall outside the grid, e.g. a
    /// pointer over a header or gutter.
    pub fn from_raw(day_index: usize, hour: u8) -> Option<Self> {
        Some(Self {
            day: Day::from_index(day_index)?,
            slot: HourSlot::new(hour)?,
        })
    }

    /// Every cell of the week, Monday 09:00 first.
    pub fn all() -> impl Iterator<Item = Cell> {
        Day::ALL
            .into_iter()
            .flat_map(|day| HourSlot::all().map(move |slot| Cell { day, slot }))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order() {
        assert!(Day::Monday < Day::Tuesday);
        assert!(Day::Saturday < Day::Sunday);
        assert_eq!(Day::ALL.len(), 7);
        assert_eq!(Day::Sunday.index(), 6);
        assert_eq!(Day::from_index(2), Some(Day::Wednesday));
        assert_eq!(Day::from_index(7), None);
    }

    #[test]
    fn test_day_parse() {
        assert_eq!("Monday".parse::<Day>(), Ok(Day::Monday));
        assert_eq!("friday".parse::<Day>(), Ok(Day::Friday));
        assert_eq!(" SUN ".parse::<Day>(), Ok(Day::Sunday));
        assert_eq!("Thu".parse::<Day>(), Ok(Day::Thursday));
        assert!("Funday".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_names() {
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
        assert_eq!(Day::Wednesday.short_name(), "Wed");
    }

    #[test]
    fn test_hour_slot_window() {
        assert!(HourSlot::new(8).is_none());
        assert_eq!(HourSlot::new(9).map(HourSlot::hour), Some(9));
        assert_eq!(HourSlot::new(21).map(HourSlot::end_hour), Some(22));
        assert!(HourSlot::new(22).is_none());
        assert_eq!(HourSlot::all().count(), SLOTS_PER_DAY);
        assert_eq!(SLOTS_PER_DAY, 13);
    }

    #[test]
    fn test_cell_from_raw() {
        let cell = Cell::from_raw(1, 14).unwrap();
        assert_eq!(cell.day, Day::Tuesday);
        assert_eq!(cell.slot.hour(), 14);
        assert_eq!(cell.to_string(), "Tuesday 14:00");

        assert!(Cell::from_raw(7, 14).is_none());
        assert!(Cell::from_raw(0, 22).is_none());
    }

    #[test]
    fn test_cell_all_ordered() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), 7 * SLOTS_PER_DAY);
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(cells[0].to_string(), "Monday 09:00");
    }
}
