use gridpath_core::{Coord, Grid};

use crate::dijkstra::best_first;
use crate::distance::manhattan;
use crate::result::SearchResult;

/// A* search from `start` to `end` with the Manhattan heuristic.
///
/// Queue priority is `g + manhattan(cell, end)`. The heuristic is
/// consistent on a 4-connected unit-cost grid, so the first pop of `end`
/// carries an optimal path, and A* never finalizes more cells than
/// [`dijkstra`](crate::dijkstra) does on the same input.
pub fn astar(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    best_first(grid, start, end, |c| manhattan(c, end))
}
