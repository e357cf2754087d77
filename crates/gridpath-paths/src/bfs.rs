use gridpath_core::{Coord, Grid};

use crate::frontier::{Fifo, Frontier};
use crate::neighbors::Neighbors;
use crate::result::SearchResult;
use crate::visits::{self, Step, Visits};

/// Breadth-first search from `start` to `end`.
///
/// The FIFO frontier finalizes cells in non-decreasing edge distance from
/// `start`, so the returned path has the fewest possible moves.
pub fn bfs(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    explore(grid, start, end, Fifo::new())
}

/// The unweighted search skeleton: pop, finalize on first pop, stop at
/// `end`, otherwise queue every not-yet-finalized passable neighbour.
/// The frontier alone decides the exploration order.
pub(crate) fn explore<F: Frontier<Step>>(
    grid: &Grid,
    start: Coord,
    end: Coord,
    mut frontier: F,
) -> SearchResult {
    let Some((si, ei)) = visits::endpoints(grid, start, end) else {
        return SearchResult::default();
    };

    let mut visits = Visits::new(grid.len());
    let mut nb = Neighbors::new();
    frontier.push(Step::root(si));

    while let Some(step) = frontier.pop() {
        if !visits.finalize(grid, step) {
            continue;
        }
        if step.idx == ei {
            return visits.into_result(grid, Some(ei));
        }

        let ci = step.idx;
        let expansion = nb
            .passable(grid, grid.coord(ci))
            .iter()
            .filter_map(|&n| grid.index(n))
            .filter(|&ni| !visits.is_done(ni))
            .map(|ni| Step { idx: ni, parent: ci });
        frontier.push_expansion(expansion);
    }

    visits.into_result(grid, None)
}
