use gridpath_core::{Coord, Grid};

use crate::bfs::explore;
use crate::frontier::Lifo;
use crate::result::SearchResult;

/// Depth-first search from `start` to `end`.
///
/// Same skeleton as [`bfs`](crate::bfs) with a LIFO frontier. Neighbours
/// are pushed in reverse canonical order, so the search dives up first,
/// then down, left, right. The path found is simple but not necessarily
/// shortest.
pub fn dfs(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    explore(grid, start, end, Lifo::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn dives_down_before_right() {
        let g = Grid::new(3, 3).unwrap();
        let r = dfs(&g, c(0, 0), c(0, 2));
        // Up is off-grid, so Down is taken first all the way, then Right,
        // then Up (the first canonical direction) back to row 0.
        assert_eq!(
            r.visited,
            vec![c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(1, 1), c(0, 1), c(0, 2)]
        );
        assert_eq!(r.path, r.visited);
    }

    #[test]
    fn path_is_simple_and_adjacent() {
        let g = Grid::parse(
            "\
S....
.###.
...#E
.#...",
        )
        .unwrap();
        let (s, e) = g.endpoints().unwrap();
        let r = dfs(&g, s, e);
        assert_eq!(r.path.first(), Some(&s));
        assert_eq!(r.path.last(), Some(&e));
        for w in r.path.windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
        let mut seen = r.path.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), r.path.len());
    }

    #[test]
    fn unreachable() {
        let g = Grid::parse("S#E").unwrap();
        let r = dfs(&g, c(0, 0), c(0, 2));
        assert!(r.path.is_empty());
        assert_eq!(r.visited, vec![c(0, 0)]);
    }
}
