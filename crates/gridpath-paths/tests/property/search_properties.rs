use std::collections::{HashSet, VecDeque};

use gridpath_core::{CellType, Coord, Grid};
use gridpath_paths::{Algorithm, SearchResult, astar, bfs, dfs, dijkstra};
use proptest::prelude::*;

/// A random grid with Start and End placed, plus their coordinates.
#[derive(Debug, Clone)]
struct Case {
    grid: Grid,
    start: Coord,
    end: Coord,
}

fn case() -> impl Strategy<Value = Case> {
    (1usize..9, 1usize..9)
        .prop_flat_map(|(rows, cols)| {
            let n = rows * cols;
            (
                Just(rows),
                Just(cols),
                proptest::collection::vec(proptest::bool::weighted(0.3), n),
                0..n,
                0..n,
            )
        })
        .prop_map(|(rows, cols, walls, si, ei)| {
            let mut grid = Grid::new(rows, cols).unwrap();
            for (i, wall) in walls.into_iter().enumerate() {
                if wall {
                    let c = grid.coord(i);
                    grid.set(c, CellType::Wall);
                }
            }
            let start = grid.coord(si);
            let end = grid.coord(ei);
            grid.set(start, CellType::Start);
            if end != start {
                grid.set(end, CellType::End);
            }
            Case { grid, start, end }
        })
}

/// A random grid cut in two by a full wall column, with Start left of
/// the cut and End right of it.
fn cut_case() -> impl Strategy<Value = Case> {
    (1usize..9, 3usize..9)
        .prop_flat_map(|(rows, cols)| (Just(rows), Just(cols), 1..cols - 1))
        .prop_flat_map(|(rows, cols, cut)| {
            (
                Just(rows),
                Just(cols),
                Just(cut),
                proptest::collection::vec(proptest::bool::weighted(0.3), rows * cols),
                (0..rows, 0..cut),
                (0..rows, cut + 1..cols),
            )
        })
        .prop_map(|(rows, cols, cut, walls, (sr, sc), (er, ec))| {
            let mut grid = Grid::new(rows, cols).unwrap();
            for (i, wall) in walls.into_iter().enumerate() {
                let c = grid.coord(i);
                if wall || c.col as usize == cut {
                    grid.set(c, CellType::Wall);
                }
            }
            let start = Coord::new(sr as i32, sc as i32);
            let end = Coord::new(er as i32, ec as i32);
            grid.set(start, CellType::Start);
            grid.set(end, CellType::End);
            Case { grid, start, end }
        })
}

/// Edge distances from `start` by plain flood fill, independent of the
/// crate's frontiers.
fn distances(grid: &Grid, start: Coord) -> Vec<Option<usize>> {
    let mut dist = vec![None; grid.len()];
    let mut queue = VecDeque::new();
    dist[grid.index(start).unwrap()] = Some(0);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[grid.index(p).unwrap()].unwrap();
        for n in p.neighbors_4() {
            if let Some(ni) = grid.index(n) {
                if grid.is_passable(n) && dist[ni].is_none() {
                    dist[ni] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
    }
    dist
}

fn all_results(c: &Case) -> Vec<(Algorithm, SearchResult)> {
    Algorithm::ALL
        .into_iter()
        .map(|a| (a, a.run(&c.grid, c.start, c.end)))
        .collect()
}

fn assert_valid_path(c: &Case, path: &[Coord]) -> Result<(), TestCaseError> {
    prop_assert_eq!(path.first(), Some(&c.start));
    prop_assert_eq!(path.last(), Some(&c.end));
    for w in path.windows(2) {
        prop_assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a single move", w[0], w[1]);
    }
    for &p in path {
        prop_assert!(c.grid.is_passable(p));
    }
    Ok(())
}

proptest! {
    #[test]
    fn visited_cells_are_in_bounds_open_and_unique(c in case()) {
        for (a, r) in all_results(&c) {
            prop_assert_eq!(r.visited.first(), Some(&c.start), "{}", a);
            let mut seen = HashSet::new();
            for &p in &r.visited {
                prop_assert!(c.grid.is_passable(p), "{} visited {}", a, p);
                prop_assert!(seen.insert(p), "{} visited {} twice", a, p);
            }
        }
    }

    #[test]
    fn bfs_path_is_minimal(c in case()) {
        let expected = distances(&c.grid, c.start)[c.grid.index(c.end).unwrap()];
        let r = bfs(&c.grid, c.start, c.end);
        prop_assert_eq!(r.cost(), expected);
        if r.is_found() {
            assert_valid_path(&c, &r.path)?;
        }
    }

    #[test]
    fn optimal_searches_agree_on_length(c in case()) {
        let b = bfs(&c.grid, c.start, c.end);
        let d = dijkstra(&c.grid, c.start, c.end);
        let a = astar(&c.grid, c.start, c.end);
        prop_assert_eq!(b.cost(), d.cost());
        prop_assert_eq!(b.cost(), a.cost());
        if a.is_found() {
            assert_valid_path(&c, &a.path)?;
            assert_valid_path(&c, &d.path)?;
        }
    }

    #[test]
    fn astar_expands_no_more_than_dijkstra(c in case()) {
        let a = astar(&c.grid, c.start, c.end);
        let d = dijkstra(&c.grid, c.start, c.end);
        prop_assert!(a.visited.len() <= d.visited.len(),
            "A* visited {} > Dijkstra {}", a.visited.len(), d.visited.len());
    }

    #[test]
    fn dfs_path_is_simple(c in case()) {
        let reachable = distances(&c.grid, c.start)[c.grid.index(c.end).unwrap()].is_some();
        let r = dfs(&c.grid, c.start, c.end);
        prop_assert_eq!(r.is_found(), reachable);
        if r.is_found() {
            assert_valid_path(&c, &r.path)?;
            let unique: HashSet<_> = r.path.iter().collect();
            prop_assert_eq!(unique.len(), r.path.len());
        }
    }

    #[test]
    fn unreachable_end_exhausts_component(c in cut_case()) {
        let dist = distances(&c.grid, c.start);
        prop_assert_eq!(dist[c.grid.index(c.end).unwrap()], None);
        let component: HashSet<Coord> = dist
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_some())
            .map(|(i, _)| c.grid.coord(i))
            .collect();
        for (a, r) in all_results(&c) {
            prop_assert!(r.path.is_empty(), "{}", a);
            let visited: HashSet<Coord> = r.visited.iter().copied().collect();
            prop_assert_eq!(&visited, &component, "{}", a);
        }
    }
}
