//! Weekly time domain models.
//!
//! Provides the core data types for recurring weekly commitments:
//! days, hour slots within the operating window, grid cells, and busy
//! intervals. Pure data; no editing or comparison behavior.
//!
//! # Domain Mappings
//!
//! | u-timetable | Student side | Job side |
//! |-------------|--------------|----------|
//! | Interval | Class block | Shift block |
//! | Cell | One marked class hour | - |
//! | Day | Timetable column | Shift day |

mod day;
mod interval;

pub use day::{Cell, Day, HourSlot, UnknownDay, FIRST_HOUR, LAST_HOUR, SLOTS_PER_DAY};
pub use interval::{Hour, Interval};
