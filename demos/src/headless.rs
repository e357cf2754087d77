//! Search and replay without a terminal UI.

use std::fmt;
use std::time::Duration;

use gridpath_core::{EngineError, Grid};
use gridpath_paths::{Algorithm, SearchResult, search};
use gridpath_replay::{Notice, Recorder, ReplayDriver, Speed, VirtualClock};

/// What a headless run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    /// The grid as the replay left it.
    pub display: Grid,
    pub notice: Option<Notice>,
    /// How long the replay would have taken on screen.
    pub replay_time: Duration,
}

/// Run `algorithm` on `grid` and replay it on a virtual clock at `speed`.
pub fn run_headless(grid: &Grid, algorithm: Algorithm, speed: Speed) -> Result<Outcome, EngineError> {
    let grid = grid.without_marks();
    let result = search(algorithm, &grid)?;
    log::debug!(
        "{algorithm}: {} visited, path {:?}",
        result.visited.len(),
        result.cost()
    );

    let mut driver = ReplayDriver::new(grid);
    let mut recorder = Recorder::default();
    let mut clock = VirtualClock::new();
    if let Some(first) = driver.start(result.clone(), speed.delay(), &mut recorder) {
        clock.schedule(first);
    }
    let replay_time = clock.run_until_idle(&mut driver, &mut recorder);

    Ok(Outcome {
        algorithm,
        result,
        display: driver.display().clone(),
        notice: recorder.notices.last().copied(),
        replay_time,
    })
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notice {
            Some(Notice::PathFound { moves }) => write!(f, "{}: path found, {moves} moves", self.algorithm)?,
            Some(Notice::NoPath) | None => write!(f, "{}: no path found", self.algorithm)?,
        }
        writeln!(
            f,
            ", {} cells visited ({} ms replay)",
            self.result.visited.len(),
            self.replay_time.as_millis()
        )?;
        write!(f, "{}", self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_path_is_drawn() {
        let grid = Grid::parse("S.#\n..#\n#.E").unwrap();
        let out = run_headless(&grid, Algorithm::Bfs, Speed::MAX).unwrap();
        assert_eq!(out.notice, Some(Notice::PathFound { moves: 4 }));
        assert_eq!(out.display.to_string(), "So#\n**#\n#*E");
        assert_eq!(
            out.to_string(),
            "BFS: path found, 4 moves, 6 cells visited (5 ms replay)\nSo#\n**#\n#*E"
        );
    }

    #[test]
    fn walled_off_end() {
        let grid = Grid::parse("S.#.\n..#E").unwrap();
        let out = run_headless(&grid, Algorithm::AStar, Speed::default()).unwrap();
        assert_eq!(out.notice, Some(Notice::NoPath));
        assert_eq!(out.display.to_string(), "So#.\noo#E");
        assert!(out.to_string().starts_with("A*: no path found, 4 cells visited"));
    }

    #[test]
    fn old_marks_are_ignored() {
        let grid = Grid::parse("S**E").unwrap();
        let out = run_headless(&grid, Algorithm::Dfs, Speed::MAX).unwrap();
        assert_eq!(out.result.visited.len(), 4);
        assert_eq!(out.display.to_string(), "S**E");
    }

    #[test]
    fn missing_end_is_an_error() {
        let grid = Grid::parse("S...").unwrap();
        assert!(matches!(
            run_headless(&grid, Algorithm::Bfs, Speed::MAX),
            Err(EngineError::MissingEndpoint(_))
        ));
    }
}
