//! Visited-on-pop bookkeeping shared by every search.

use gridpath_core::{Coord, Grid};

use crate::result::SearchResult;

/// Parent of the start cell.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Frontier payload: a cell and the already-finalized cell it was reached
/// from. The parent link stands in for the full candidate path, which is
/// the parent's fixed path plus this cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) idx: usize,
    pub(crate) parent: usize,
}

impl Step {
    #[inline]
    pub(crate) fn root(idx: usize) -> Self {
        Self {
            idx,
            parent: NO_PARENT,
        }
    }
}

/// Finalization state over the flat cell array.
pub(crate) struct Visits {
    done: Vec<bool>,
    parent: Vec<usize>,
    order: Vec<Coord>,
}

impl Visits {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            done: vec![false; len],
            parent: vec![NO_PARENT; len],
            order: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn is_done(&self, idx: usize) -> bool {
        self.done[idx]
    }

    /// Finalize a popped step. Returns `false` (and changes nothing) if the
    /// cell was already finalized by an earlier pop.
    pub(crate) fn finalize(&mut self, grid: &Grid, step: Step) -> bool {
        if self.done[step.idx] {
            return false;
        }
        self.done[step.idx] = true;
        self.parent[step.idx] = step.parent;
        self.order.push(grid.coord(step.idx));
        true
    }

    /// Build the result. `goal` is the end index if it was reached.
    pub(crate) fn into_result(self, grid: &Grid, goal: Option<usize>) -> SearchResult {
        let mut path = Vec::new();
        if let Some(mut ci) = goal {
            while ci != NO_PARENT {
                path.push(grid.coord(ci));
                ci = self.parent[ci];
            }
            path.reverse();
        }
        SearchResult {
            path,
            visited: self.order,
        }
    }
}

/// Flat indices of `start` and `end`, or `None` if either is off the grid.
pub(crate) fn endpoints(grid: &Grid, start: Coord, end: Coord) -> Option<(usize, usize)> {
    match (grid.index(start), grid.index(end)) {
        (Some(si), Some(ei)) => Some((si, ei)),
        _ => {
            log::warn!("search endpoints {start} -> {end} outside {}x{} grid", grid.rows(), grid.cols());
            None
        }
    }
}
