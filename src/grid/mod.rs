//! Editable weekly availability grid.
//!
//! The grid is the edit-time source of truth: a map from [`Cell`] to the
//! label of the activity occupying it. Absent cells are free. Interval
//! lists are an hour-granular projection used for data interchange.
//!
//! # Out-of-window input
//! [`AvailabilityGrid::hydrate`] drops every hour of an interval that lies
//! outside the operating window and keeps the rest. Direct edits take a
//! [`Cell`], which cannot be built outside the window.
//!
//! # Change notification
//! A single listener may be registered. It receives the derived interval
//! list after every operation that changed the cell map; no-op edits do
//! not notify.
//!
//! # Example
//! ```
//! use u_timetable::grid::AvailabilityGrid;
//! use u_timetable::models::{Cell, Day, Interval};
//!
//! let mut grid = AvailabilityGrid::new();
//! grid.hydrate(&[Interval::new(Day::Monday, 9, 11, "Lecture")]);
//!
//! let nine = Cell::from_raw(0, 9).unwrap();
//! assert_eq!(grid.label(nine), Some("Lecture"));
//! assert_eq!(grid.to_interval_list().len(), 2);
//! ```

pub mod selection;

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::config::TimetableConfig;
use crate::interchange::{slots_to_intervals, ScheduleSlot};
use crate::models::{Cell, Day, Interval};

/// Callback receiving the derived interval list after each change.
pub type GridListener = Box<dyn FnMut(&[Interval])>;

/// Weekly availability as an editable cell map.
///
/// Invariant: every stored label is non-empty.
pub struct AvailabilityGrid {
    cells: BTreeMap<Cell, String>,
    config: TimetableConfig,
    listener: Option<GridListener>,
}

impl AvailabilityGrid {
    /// Creates an empty grid with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TimetableConfig::default())
    }

    /// Creates an empty grid.
    pub fn with_config(config: TimetableConfig) -> Self {
        Self {
            cells: BTreeMap::new(),
            config,
            listener: None,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Registers the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(&[Interval]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the change listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Replaces the grid content with the hours covered by `intervals`.
    ///
    /// Each interval expands to one cell per whole hour in `[start, end)`,
    /// labelled with the interval label (or the default label when blank).
    /// Hours outside the operating window are dropped.
    pub fn hydrate(&mut self, intervals: &[Interval]) {
        let mut cells = BTreeMap::new();
        for interval in intervals {
            let label = self.config.label_or_default(Some(interval.label.as_str()));
            let mut kept = 0u8;
            for cell in interval.cells() {
                cells.insert(cell, label.clone());
                kept += 1;
            }
            if kept < interval.duration_hours() {
                debug!(
                    day = %interval.day,
                    start = interval.start,
                    end = interval.end,
                    dropped = interval.duration_hours() - kept,
                    "dropping hours outside the operating window"
                );
            }
        }

        if cells != self.cells {
            self.cells = cells;
            self.notify();
        }
    }

    /// Hydrates from wire slots, skipping malformed entries.
    pub fn hydrate_slots(&mut self, slots: &[ScheduleSlot]) {
        let intervals = slots_to_intervals(slots, &self.config);
        self.hydrate(&intervals);
    }

    /// Flips a cell between occupied and free.
    ///
    /// A free cell becomes occupied with the default label.
    /// Returns the new occupancy.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        let occupied = if self.cells.remove(&cell).is_some() {
            false
        } else {
            self.cells.insert(cell, self.config.cell_label().to_string());
            true
        };
        trace!(%cell, occupied, "toggled cell");
        self.notify();
        occupied
    }

    /// Sets a cell's occupancy explicitly.
    ///
    /// Idempotent: an occupied cell keeps its label when set occupied
    /// again. Returns whether the grid changed.
    pub fn set_cell(&mut self, cell: Cell, occupied: bool) -> bool {
        let changed = if occupied {
            if self.cells.contains_key(&cell) {
                false
            } else {
                self.cells.insert(cell, self.config.cell_label().to_string());
                true
            }
        } else {
            self.cells.remove(&cell).is_some()
        };

        if changed {
            trace!(%cell, occupied, "set cell");
            self.notify();
        }
        changed
    }

    /// Frees every cell.
    pub fn clear(&mut self) {
        if !self.cells.is_empty() {
            self.cells.clear();
            self.notify();
        }
    }

    /// Whether a cell is occupied.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Label of an occupied cell.
    pub fn label(&self, cell: Cell) -> Option<&str> {
        self.cells.get(&cell).map(String::as_str)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells with their labels, week order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, &str)> {
        self.cells.iter().map(|(cell, label)| (*cell, label.as_str()))
    }

    /// Occupied cells of one day, earliest first.
    pub fn occupied_on(&self, day: Day) -> impl Iterator<Item = (Cell, &str)> {
        self.occupied().filter(move |(cell, _)| cell.day == day)
    }

    /// One one-hour interval per occupied cell, week order, unmerged.
    pub fn to_interval_list(&self) -> Vec<Interval> {
        self.cells
            .iter()
            .map(|(cell, label)| Interval::from_cell(*cell, label.clone()))
            .collect()
    }

    /// Outbound wire form: one slot per occupied cell.
    pub fn to_schedule_slots(&self) -> Vec<ScheduleSlot> {
        self.to_interval_list()
            .iter()
            .map(ScheduleSlot::from_interval)
            .collect()
    }

    /// Adjacent same-label hours merged into multi-hour intervals.
    ///
    /// For display; the save path uses [`to_interval_list`](Self::to_interval_list).
    pub fn coalesced_intervals(&self) -> Vec<Interval> {
        let mut merged: Vec<Interval> = Vec::new();
        for (cell, label) in &self.cells {
            if let Some(last) = merged.last_mut() {
                if last.day == cell.day
                    && last.end == cell.slot.hour()
                    && last.label == *label
                {
                    last.end = cell.slot.end_hour();
                    continue;
                }
            }
            merged.push(Interval::from_cell(*cell, label.clone()));
        }
        merged
    }

    fn notify(&mut self) {
        if self.listener.is_none() {
            return;
        }
        let intervals = self.to_interval_list();
        if let Some(listener) = self.listener.as_mut() {
            listener(&intervals);
        }
    }
}

impl Default for AvailabilityGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AvailabilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailabilityGrid")
            .field("cells", &self.cells)
            .field("config", &self.config)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
