//! Drag-to-paint / drag-to-erase gesture handling.
//!
//! Translates pointer events into grid mutations. A gesture starts on
//! press; whether it paints or erases is decided once, from the pressed
//! cell's occupancy, and never changes until the gesture ends.
//!
//! ```text
//!            press(cell)                 enter(cell) -> set_cell
//!   Idle ─────────────────▶ Dragging(mode) ◀──────┐
//!    ▲                           │   └────────────┘
//!    └──── release / leave ──────┘
//! ```
//!
//! Events are handled one at a time to completion; the host delivers
//! them serially.

use tracing::debug;

use super::AvailabilityGrid;
use crate::models::Cell;

/// Whether a drag turns cells on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Mark entered cells occupied.
    Paint,
    /// Mark entered cells free.
    Erase,
}

/// Gesture state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// No pointer held.
    #[default]
    Idle,
    /// Pointer held; mode fixed at press.
    Dragging(DragMode),
}

/// Pointer-level input from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer pressed over a cell.
    Press(Cell),
    /// Pointer moved into a cell.
    Enter(Cell),
    /// Pointer released.
    Release,
    /// Pointer left the grid surface.
    LeaveGrid,
}

/// A single cell mutation caused by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub cell: Cell,
    /// Occupancy after the change.
    pub occupied: bool,
}

/// Gesture state machine over an [`AvailabilityGrid`].
///
/// # Example
/// ```
/// use u_timetable::grid::AvailabilityGrid;
/// use u_timetable::grid::selection::Selection;
/// use u_timetable::models::Cell;
///
/// let mut grid = AvailabilityGrid::new();
/// let mut selection = Selection::new();
///
/// selection.press(&mut grid, Cell::from_raw(1, 14).unwrap());
/// selection.enter(&mut grid, Cell::from_raw(1, 15).unwrap());
/// selection.release();
///
/// assert_eq!(grid.occupied_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selection {
    state: SelectionState,
}

impl Selection {
    /// Creates an idle selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging(_))
    }

    /// Mode of the gesture in progress.
    pub fn mode(&self) -> Option<DragMode> {
        match self.state {
            SelectionState::Dragging(mode) => Some(mode),
            SelectionState::Idle => None,
        }
    }

    /// Starts a gesture on `cell` and toggles it.
    ///
    /// Erases if the cell was occupied, paints otherwise. A press during
    /// a gesture (release was lost) starts a fresh gesture.
    pub fn press(&mut self, grid: &mut AvailabilityGrid, cell: Cell) -> Option<CellChange> {
        let mode = if grid.is_occupied(cell) {
            DragMode::Erase
        } else {
            DragMode::Paint
        };
        debug!(%cell, ?mode, "drag started");
        self.state = SelectionState::Dragging(mode);
        let occupied = grid.toggle(cell);
        Some(CellChange { cell, occupied })
    }

    /// Applies the gesture's mode to an entered cell.
    ///
    /// No-op when idle or when the cell already has the target occupancy.
    pub fn enter(&mut self, grid: &mut AvailabilityGrid, cell: Cell) -> Option<CellChange> {
        let SelectionState::Dragging(mode) = self.state else {
            return None;
        };
        let occupied = mode == DragMode::Paint;
        grid.set_cell(cell, occupied).then_some(CellChange { cell, occupied })
    }

    /// Like [`enter`](Self::enter) for raw host coordinates.
    ///
    /// Coordinates outside any cell are ignored.
    pub fn enter_raw(
        &mut self,
        grid: &mut AvailabilityGrid,
        day_index: usize,
        hour: u8,
    ) -> Option<CellChange> {
        let cell = Cell::from_raw(day_index, hour)?;
        self.enter(grid, cell)
    }

    /// Ends the gesture.
    pub fn release(&mut self) {
        if self.is_dragging() {
            debug!("drag released");
        }
        self.state = SelectionState::Idle;
    }

    /// Pointer left the grid: treated as a release.
    pub fn leave_grid(&mut self) {
        self.release();
    }

    /// Dispatches a pointer event.
    pub fn handle(&mut self, grid: &mut AvailabilityGrid, event: PointerEvent) -> Option<CellChange> {
        match event {
            PointerEvent::Press(cell) => self.press(grid, cell),
            PointerEvent::Enter(cell) => self.enter(grid, cell),
            PointerEvent::Release => {
                self.release();
                None
            }
            PointerEvent::LeaveGrid => {
                self.leave_grid();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Interval};

    fn cell(day: Day, hour: u8) -> Cell {
        Cell::from_raw(day.index(), hour).unwrap()
    }

    #[test]
    fn test_paint_drag_then_single_erase() {
        let mut grid = AvailabilityGrid::new();
        let mut sel = Selection::new();

        sel.press(&mut grid, cell(Day::Tuesday, 14));
        assert_eq!(sel.mode(), Some(DragMode::Paint));
        sel.enter(&mut grid, cell(Day::Tuesday, 15));
        sel.enter(&mut grid, cell(Day::Tuesday, 16));
        sel.release();

        assert_eq!(sel.state(), SelectionState::Idle);
        for h in 14..=16 {
            assert!(grid.is_occupied(cell(Day::Tuesday, h)));
        }

        sel.press(&mut grid, cell(Day::Tuesday, 14));
        assert_eq!(sel.mode(), Some(DragMode::Erase));
        sel.release();

        assert!(!grid.is_occupied(cell(Day::Tuesday, 14)));
        assert!(grid.is_occupied(cell(Day::Tuesday, 15)));
        assert!(grid.is_occupied(cell(Day::Tuesday, 16)));
    }

    #[test]
    fn test_erase_drag() {
        let mut grid = AvailabilityGrid::new();
        grid.hydrate(&[Interval::new(Day::Monday, 9, 13, "Lecture")]);
        let mut sel = Selection::new();

        sel.press(&mut grid, cell(Day::Monday, 9));
        sel.enter(&mut grid, cell(Day::Monday, 10));
        sel.enter(&mut grid, cell(Day::Monday, 11));
        sel.release();

        assert_eq!(grid.occupied_count(), 1);
        assert!(grid.is_occupied(cell(Day::Monday, 12)));
    }

    #[test]
    fn test_mode_fixed_for_gesture() {
        let mut grid = AvailabilityGrid::new();
        grid.hydrate(&[Interval::new(Day::Friday, 12, 13, "Lab")]);
        let mut sel = Selection::new();

        // Paint gesture passing over an occupied cell leaves it occupied.
        sel.press(&mut grid, cell(Day::Friday, 10));
        let change = sel.enter(&mut grid, cell(Day::Friday, 12));
        assert_eq!(change, None);
        assert_eq!(grid.label(cell(Day::Friday, 12)), Some("Lab"));

        // Moving back over the pressed cell does not flip the mode.
        sel.enter(&mut grid, cell(Day::Friday, 11));
        sel.enter(&mut grid, cell(Day::Friday, 10));
        assert_eq!(sel.mode(), Some(DragMode::Paint));
        assert!(grid.is_occupied(cell(Day::Friday, 10)));
        assert!(grid.is_occupied(cell(Day::Friday, 11)));
    }

    #[test]
    fn test_reenter_emits_nothing() {
        let mut grid = AvailabilityGrid::new();
        let mut sel = Selection::new();
        let a = cell(Day::Wednesday, 9);
        let b = cell(Day::Wednesday, 10);

        assert_eq!(
            sel.press(&mut grid, a),
            Some(CellChange { cell: a, occupied: true })
        );
        assert_eq!(
            sel.enter(&mut grid, b),
            Some(CellChange { cell: b, occupied: true })
        );
        assert_eq!(sel.enter(&mut grid, b), None);
        assert_eq!(sel.enter(&mut grid, a), None);
    }

    #[test]
    fn test_enter_while_idle_ignored() {
        let mut grid = AvailabilityGrid::new();
        let mut sel = Selection::new();
        assert_eq!(sel.enter(&mut grid, cell(Day::Monday, 9)), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_leave_grid_ends_drag() {
        let mut grid = AvailabilityGrid::new();
        let mut sel = Selection::new();

        sel.handle(&mut grid, PointerEvent::Press(cell(Day::Monday, 9)));
        sel.handle(&mut grid, PointerEvent::LeaveGrid);
        assert!(!sel.is_dragging());

        // Re-entering after leaving does not paint.
        sel.handle(&mut grid, PointerEvent::Enter(cell(Day::Monday, 10)));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_enter_raw_outside_grid() {
        let mut grid = AvailabilityGrid::new();
        let mut sel = Selection::new();
        sel.press(&mut grid, cell(Day::Monday, 20));

        assert_eq!(sel.enter_raw(&mut grid, 0, 22), None);
        assert_eq!(sel.enter_raw(&mut grid, 9, 20), None);
        assert!(sel.enter_raw(&mut grid, 0, 21).is_some());
        assert!(sel.is_dragging());
    }

    #[test]
    fn test_press_during_drag_restarts() {
        let mut grid = AvailabilityGrid::new();
        grid.hydrate(&[Interval::new(Day::Sunday, 15, 16, "Class")]);
        let mut sel = Selection::new();

        sel.press(&mut grid, cell(Day::Sunday, 9));
        assert_eq!(sel.mode(), Some(DragMode::Paint));
        sel.press(&mut grid, cell(Day::Sunday, 15));
        assert_eq!(sel.mode(), Some(DragMode::Erase));
        assert!(!grid.is_occupied(cell(Day::Sunday, 15)));
    }
}
