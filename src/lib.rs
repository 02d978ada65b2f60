//! Weekly availability editing and schedule-conflict analysis.
//!
//! A student marks recurring weekly classes on an hour grid; a job offers
//! recurring weekly shifts. This crate models the grid, the drag gestures
//! that edit it, and the comparison that decides whether a job fits.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `HourSlot`, `Cell`, `Interval`
//! - **`interchange`**: Wire shapes of the schedule API and time parsing
//! - **`grid`**: `AvailabilityGrid` and the `Selection` gesture state machine
//! - **`conflict`**: Per-day overlap verdicts and the advisory headline
//! - **`tiers`**: Location-tier grouping and match labels for job lists
//! - **`session`**: Load / edit / save lifecycle over a `ScheduleStore`
//! - **`validation`**: Batch checks over saved schedule slots
//!
//! # Architecture
//!
//! Everything is synchronous and single-owner. Authentication, job
//! listing, persistence, and match scoring belong to the remote API,
//! reached only through [`session::ScheduleStore`] and the serde types in
//! [`interchange`] and [`tiers`]. Logging goes through `tracing`; no
//! subscriber is installed here.

pub mod config;
pub mod conflict;
pub mod error;
pub mod grid;
pub mod interchange;
pub mod models;
pub mod session;
pub mod tiers;
pub mod validation;

pub use config::TimetableConfig;
pub use conflict::{DayComparison, DayVerdict, Headline, JobFit, ScheduleComparison};
pub use error::{SessionError, SlotError, TimeParseError};
pub use grid::selection::{CellChange, DragMode, PointerEvent, Selection, SelectionState};
pub use grid::AvailabilityGrid;
pub use session::{EditorSession, ScheduleStore, SessionStatus};
pub use tiers::{LocationGroup, MatchLabel};
