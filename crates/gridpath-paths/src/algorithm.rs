//! Algorithm selection and the checked entry points.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Coord, EngineError, Grid};

use crate::result::SearchResult;
use crate::{astar, bfs, dfs, dijkstra};

/// One of the four supported searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// One-line summary of the exploration strategy.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bfs => "explores every neighbour at the current depth before going deeper (queue)",
            Self::Dfs => "follows one branch as deep as possible before backtracking (stack)",
            Self::Dijkstra => "expands the cell with the smallest distance so far (priority queue, unit cost)",
            Self::AStar => "expands the cell with the smallest distance plus Manhattan estimate (priority queue)",
        }
    }

    /// Whether the returned path is always a shortest one.
    pub const fn guarantees_shortest(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Run this search. See [`run`].
    pub fn run(self, grid: &Grid, start: Coord, end: Coord) -> SearchResult {
        run(self, grid, start, end)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    /// Accepts the display names and common spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "depth-first" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            _ => Err(EngineError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Run `algorithm` on `grid` from `start` to `end`.
///
/// Pure and deterministic. An unreachable end is a successful result with
/// an empty path. Endpoints outside the grid yield an empty result; use
/// [`run_checked`] to have them reported instead.
pub fn run(algorithm: Algorithm, grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    let result = match algorithm {
        Algorithm::Bfs => bfs(grid, start, end),
        Algorithm::Dfs => dfs(grid, start, end),
        Algorithm::Dijkstra => dijkstra(grid, start, end),
        Algorithm::AStar => astar(grid, start, end),
    };
    log::debug!(
        "{algorithm} {start} -> {end}: visited {}, path {}",
        result.visited.len(),
        result.path.len()
    );
    result
}

/// Like [`run`], but rejects endpoints outside the grid.
pub fn run_checked(
    algorithm: Algorithm,
    grid: &Grid,
    start: Coord,
    end: Coord,
) -> Result<SearchResult, EngineError> {
    for c in [start, end] {
        if !grid.contains(c) {
            return Err(EngineError::OutOfBounds(c));
        }
    }
    Ok(run(algorithm, grid, start, end))
}

/// Run `algorithm` between the grid's own Start and End cells. A grid
/// with a second Start or End is rejected before anything is searched.
pub fn search(algorithm: Algorithm, grid: &Grid) -> Result<SearchResult, EngineError> {
    let (start, end) = grid.endpoints()?;
    Ok(run(algorithm, grid, start, end))
}
