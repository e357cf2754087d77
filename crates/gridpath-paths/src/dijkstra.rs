use gridpath_core::{Coord, Grid};

use crate::frontier::{Frontier, MinQueue, Prioritized};
use crate::neighbors::Neighbors;
use crate::result::SearchResult;
use crate::visits::{self, Step, Visits};

/// Sentinel cost for cells not reached yet.
pub(crate) const UNREACHABLE: u32 = u32::MAX;

/// Uniform-cost (Dijkstra) search from `start` to `end`.
///
/// Every move costs 1. Ties in cumulative cost pop in the order they were
/// queued, so the exploration order is reproducible but can differ from
/// [`bfs`](crate::bfs) even though the path length is the same.
pub fn dijkstra(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    best_first(grid, start, end, |_| 0)
}

/// Priority-frontier search skeleton shared by Dijkstra and A*.
///
/// Keeps a table `g` of the best known cost to each cell. A neighbour is
/// queued with priority `g + heuristic` whenever its cost improves;
/// finalization happens on first pop.
pub(crate) fn best_first(
    grid: &Grid,
    start: Coord,
    end: Coord,
    heuristic: impl Fn(Coord) -> u32,
) -> SearchResult {
    let Some((si, ei)) = visits::endpoints(grid, start, end) else {
        return SearchResult::default();
    };

    let mut g = vec![UNREACHABLE; grid.len()];
    g[si] = 0;

    let mut visits = Visits::new(grid.len());
    let mut nb = Neighbors::new();
    let mut open: MinQueue<Step> = MinQueue::new();
    open.push(Prioritized::new(u64::from(heuristic(start)), Step::root(si)));

    while let Some(Prioritized { item: step, .. }) = open.pop() {
        if !visits.finalize(grid, step) {
            continue;
        }
        if step.idx == ei {
            return visits.into_result(grid, Some(ei));
        }

        let ci = step.idx;
        let tentative = g[ci] + 1;
        for &np in nb.passable(grid, grid.coord(ci)) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if tentative >= g[ni] {
                continue;
            }
            g[ni] = tentative;
            open.push(Prioritized::new(
                u64::from(tentative) + u64::from(heuristic(np)),
                Step { idx: ni, parent: ci },
            ));
        }
    }

    visits.into_result(grid, None)
}
