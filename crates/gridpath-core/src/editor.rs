//! Interactive grid editing.
//!
//! [`GridEditor`] owns the logical grid the user is drawing on and applies
//! the click rules of the visualizer: clicking an endpoint removes it, the
//! first free clicks place Start then End, and once both exist clicks
//! toggle walls. Every change bumps [`revision`](GridEditor::revision) so a
//! host can reset a replay that was running against an older grid.

use crate::cell::CellType;
use crate::error::EngineError;
use crate::geom::Coord;
use crate::grid::Grid;

/// Smallest grid side the editor creates.
pub const MIN_SIZE: usize = 5;
/// Largest grid side the editor creates.
pub const MAX_SIZE: usize = 50;
/// Default grid side.
pub const DEFAULT_SIZE: usize = 20;

/// What a click did to the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    StartPlaced,
    StartCleared,
    EndPlaced,
    EndCleared,
    WallPlaced,
    WallRemoved,
}

/// Owner of the editable logical grid.
#[derive(Debug, Clone)]
pub struct GridEditor {
    grid: Grid,
    revision: u64,
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl GridEditor {
    /// Create an editor over an empty `size`×`size` grid. `size` is clamped
    /// to [`MIN_SIZE`]..=[`MAX_SIZE`].
    pub fn new(size: usize) -> Self {
        Self {
            grid: square(size),
            revision: 0,
        }
    }

    /// Start editing an existing grid (e.g. a loaded layout).
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, revision: 0 }
    }

    /// The current grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// An immutable snapshot to hand to a search.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Monotonic edit counter.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Both endpoints, or [`EngineError::MissingEndpoint`].
    pub fn endpoints(&self) -> Result<(Coord, Coord), EngineError> {
        self.grid.endpoints()
    }

    /// Apply a click at `c`. Returns `None` if `c` is outside the grid.
    pub fn click(&mut self, c: Coord) -> Option<Edit> {
        let current = self.grid.at(c)?;
        let (cell, edit) = match current {
            CellType::Start => (CellType::Empty, Edit::StartCleared),
            CellType::End => (CellType::Empty, Edit::EndCleared),
            _ if self.grid.start().is_none() => (CellType::Start, Edit::StartPlaced),
            _ if self.grid.end().is_none() => (CellType::End, Edit::EndPlaced),
            CellType::Wall => (CellType::Empty, Edit::WallRemoved),
            _ => (CellType::Wall, Edit::WallPlaced),
        };
        self.grid.set(c, cell);
        self.touch();
        log::debug!("edit {edit:?} at {c}");
        Some(edit)
    }

    /// Replace the grid with an empty `size`×`size` one.
    pub fn resize(&mut self, size: usize) {
        self.grid = square(size);
        self.touch();
    }

    /// Replace the grid wholesale.
    pub fn load(&mut self, grid: Grid) {
        self.grid = grid;
        self.touch();
    }

    /// Clear every cell, endpoints included, keeping the dimensions.
    pub fn reset(&mut self) {
        self.grid = Grid::blank(self.grid.rows(), self.grid.cols());
        self.touch();
    }

    /// Remove Visited/Path marks left by a previous replay.
    pub fn clear_search(&mut self) {
        self.grid = self.grid.without_marks();
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn square(size: usize) -> Grid {
    let side = size.clamp(MIN_SIZE, MAX_SIZE);
    Grid::blank(side, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_clamped() {
        assert_eq!(GridEditor::new(1).grid().rows(), MIN_SIZE);
        assert_eq!(GridEditor::new(80).grid().cols(), MAX_SIZE);
        assert_eq!(GridEditor::default().grid().rows(), DEFAULT_SIZE);
    }

    #[test]
    fn clicks_place_start_then_end_then_walls() {
        let mut ed = GridEditor::new(5);
        assert_eq!(ed.click(Coord::new(0, 0)), Some(Edit::StartPlaced));
        assert_eq!(ed.click(Coord::new(4, 4)), Some(Edit::EndPlaced));
        assert_eq!(ed.click(Coord::new(2, 2)), Some(Edit::WallPlaced));
        assert_eq!(ed.click(Coord::new(2, 2)), Some(Edit::WallRemoved));
        assert_eq!(ed.endpoints(), Ok((Coord::new(0, 0), Coord::new(4, 4))));
        assert_eq!(ed.revision(), 4);
    }

    #[test]
    fn clicking_endpoint_clears_it_and_next_click_replaces_it() {
        let mut ed = GridEditor::new(5);
        ed.click(Coord::new(0, 0));
        ed.click(Coord::new(4, 4));
        assert_eq!(ed.click(Coord::new(0, 0)), Some(Edit::StartCleared));
        assert!(ed.grid().start().is_none());
        // With End still present the next free click places Start again.
        assert_eq!(ed.click(Coord::new(1, 1)), Some(Edit::StartPlaced));
        assert_eq!(ed.grid().start(), Some(Coord::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_click_is_ignored() {
        let mut ed = GridEditor::new(5);
        assert_eq!(ed.click(Coord::new(9, 0)), None);
        assert_eq!(ed.revision(), 0);
    }

    #[test]
    fn clear_search_keeps_walls_and_endpoints() {
        let mut ed = GridEditor::from_grid(Grid::parse("So#*E").unwrap());
        ed.clear_search();
        assert_eq!(ed.grid().to_string(), "S.#.E");
    }

    #[test]
    fn reset_and_resize() {
        let mut ed = GridEditor::from_grid(Grid::parse("S.#..\n....E").unwrap());
        ed.reset();
        assert_eq!(ed.grid().to_string(), ".....\n.....");
        ed.resize(7);
        assert_eq!((ed.grid().rows(), ed.grid().cols()), (7, 7));
    }
}
