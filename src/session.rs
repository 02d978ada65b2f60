//! Editing session lifecycle.
//!
//! A session owns one grid for its whole lifetime: it is hydrated from the
//! store, edited through pointer gestures, and written back on explicit
//! save. Load and save failures are recorded as visible, non-fatal states;
//! a failed save leaves the grid untouched so the user can retry.
//!
//! The store is the external schedule API. No retry, idempotency, or
//! timeout logic lives here.

use tracing::{error, info, warn};

use crate::config::TimetableConfig;
use crate::conflict::JobFit;
use crate::error::SessionError;
use crate::grid::selection::{CellChange, PointerEvent, Selection};
use crate::grid::AvailabilityGrid;
use crate::interchange::{shifts_to_intervals, JobShift, ScheduleSlot};
use crate::models::Interval;

/// Remote source and sink of the student's weekly schedule.
pub trait ScheduleStore {
    /// Transport or server error.
    type Error: std::error::Error + 'static;

    /// Fetches the saved schedule.
    fn load(&mut self) -> Result<Vec<ScheduleSlot>, Self::Error>;

    /// Replaces the saved schedule.
    fn save(&mut self, slots: &[ScheduleSlot]) -> Result<(), Self::Error>;
}

/// Visible session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nothing fetched yet.
    #[default]
    Unloaded,
    /// Hydrated from the store.
    Ready,
    /// Fetch failed; grid left empty.
    LoadFailed(String),
    /// Last save succeeded.
    Saved,
    /// Last save failed; edits kept.
    SaveFailed(String),
}

/// One user's editing session over their weekly schedule.
#[derive(Debug)]
pub struct EditorSession {
    grid: AvailabilityGrid,
    selection: Selection,
    status: SessionStatus,
    /// Interval list as last loaded or saved.
    baseline: Vec<Interval>,
}

impl EditorSession {
    /// Creates an unloaded session.
    pub fn new(config: TimetableConfig) -> Self {
        Self {
            grid: AvailabilityGrid::with_config(config),
            selection: Selection::new(),
            status: SessionStatus::Unloaded,
            baseline: Vec::new(),
        }
    }

    /// Fetches and hydrates the grid. Returns the number of occupied cells.
    pub fn load<S: ScheduleStore>(
        &mut self,
        store: &mut S,
    ) -> Result<usize, SessionError<S::Error>> {
        match store.load() {
            Ok(slots) => {
                self.grid.hydrate_slots(&slots);
                self.baseline = self.grid.to_interval_list();
                self.status = SessionStatus::Ready;
                info!(
                    slots = slots.len(),
                    cells = self.grid.occupied_count(),
                    "schedule loaded"
                );
                Ok(self.grid.occupied_count())
            }
            Err(e) => {
                warn!(error = %e, "failed to load schedule");
                self.status = SessionStatus::LoadFailed(e.to_string());
                Err(SessionError::Load(e))
            }
        }
    }

    /// Writes the grid back to the store, one slot per occupied cell.
    pub fn save<S: ScheduleStore>(&mut self, store: &mut S) -> Result<(), SessionError<S::Error>> {
        let slots = self.grid.to_schedule_slots();
        match store.save(&slots) {
            Ok(()) => {
                self.baseline = self.grid.to_interval_list();
                self.status = SessionStatus::Saved;
                info!(slots = slots.len(), "schedule saved");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to save schedule");
                self.status = SessionStatus::SaveFailed(e.to_string());
                Err(SessionError::Save(e))
            }
        }
    }

    /// Routes a pointer event through the gesture state machine.
    pub fn handle(&mut self, event: PointerEvent) -> Option<CellChange> {
        self.selection.handle(&mut self.grid, event)
    }

    /// Frees every cell.
    pub fn clear(&mut self) {
        self.selection.release();
        self.grid.clear();
    }

    /// Whether the grid differs from what was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        self.grid.to_interval_list() != self.baseline
    }

    /// Compares the current grid against a job's shifts.
    pub fn fit_for<A: AsRef<str>>(&self, shifts: &[JobShift], advisories: &[A]) -> JobFit {
        let classes = self.grid.to_interval_list();
        let shifts = shifts_to_intervals(shifts);
        JobFit::evaluate(&classes, &shifts, advisories, self.grid.config())
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn grid(&self) -> &AvailabilityGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut AvailabilityGrid {
        &mut self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(TimetableConfig::default())
    }
}
