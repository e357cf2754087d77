//! The replay state machine.

use std::time::Duration;

use gridpath_core::{CellType, Coord, Grid};
use gridpath_paths::SearchResult;

/// A single display-grid change pushed to the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RevealEvent {
    pub coord: Coord,
    pub cell: CellType,
}

/// User-facing outcome of a replay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The path has been revealed; `moves` is its length in steps.
    PathFound { moves: usize },
    /// The search finished without reaching the end. Not an error.
    NoPath,
}

/// Receiver of replay output.
pub trait Renderer {
    /// The display grid was reset; redraw it entirely.
    fn reset(&mut self, grid: &Grid);

    /// One cell changed.
    fn reveal(&mut self, event: RevealEvent);

    /// The run finished.
    fn notice(&mut self, notice: Notice);
}

/// A renderer that just records what it was told.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub resets: usize,
    pub events: Vec<RevealEvent>,
    pub notices: Vec<Notice>,
}

impl Recorder {
    /// Coordinates revealed with the given cell type, in order.
    pub fn revealed(&self, cell: CellType) -> Vec<Coord> {
        self.events
            .iter()
            .filter(|e| e.cell == cell)
            .map(|e| e.coord)
            .collect()
    }
}

impl Renderer for Recorder {
    fn reset(&mut self, _grid: &Grid) {
        self.resets += 1;
    }

    fn reveal(&mut self, event: RevealEvent) {
        self.events.push(event);
    }

    fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Lifecycle of the current run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReplayState {
    Idle,
    Running,
    Done,
    Cancelled,
}

/// A scheduled replay step.
///
/// The host waits [`delay`](Self::delay) and then hands the tick back to
/// [`ReplayDriver::step`]. Ticks from an older run generation are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
    step: usize,
    delay: Duration,
}

impl Tick {
    /// How long to wait before delivering this tick.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The run this tick belongs to.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index into the visited sequence this tick reveals.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }
}

/// Progressive reveal of a [`SearchResult`] on a private display grid.
///
/// The driver is the only writer of its display grid. The logical grid it
/// was built from is kept to reset the display between runs.
pub struct ReplayDriver {
    source: Grid,
    display: Grid,
    result: SearchResult,
    generation: u64,
    state: ReplayState,
    delay: Duration,
}

impl ReplayDriver {
    /// Create an idle driver for `grid`. Search marks already on the grid
    /// are not copied to the display.
    pub fn new(grid: Grid) -> Self {
        let display = grid.without_marks();
        Self {
            source: grid,
            display,
            result: SearchResult::default(),
            generation: 0,
            state: ReplayState::Idle,
            delay: Duration::ZERO,
        }
    }

    /// The display grid as revealed so far.
    #[inline]
    pub fn display(&self) -> &Grid {
        &self.display
    }

    #[inline]
    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// Current run generation.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Delay applied to the next scheduled step.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a run is in progress.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == ReplayState::Running
    }

    /// Change the delay for every step scheduled from now on, including
    /// the remaining steps of the current run.
    pub fn set_delay(&mut self, delay: Duration) {
        log::trace!("replay delay {:?} -> {:?}", self.delay, delay);
        self.delay = delay;
    }

    /// Begin replaying `result`, invalidating any previous run.
    ///
    /// Returns the first tick (due immediately), or `None` if there is
    /// nothing to reveal, in which case [`Notice::NoPath`] has already been
    /// sent and the driver is [`Done`](ReplayState::Done).
    pub fn start(
        &mut self,
        result: SearchResult,
        base_delay: Duration,
        renderer: &mut impl Renderer,
    ) -> Option<Tick> {
        self.bump();
        self.display = self.source.without_marks();
        renderer.reset(&self.display);
        self.delay = base_delay;
        self.result = result;

        if self.result.visited.is_empty() {
            log::debug!("replay {}: nothing visited", self.generation);
            self.state = ReplayState::Done;
            renderer.notice(Notice::NoPath);
            return None;
        }

        log::debug!(
            "replay {}: {} visited, {} path cells, delay {:?}",
            self.generation,
            self.result.visited.len(),
            self.result.path.len(),
            base_delay
        );
        self.state = ReplayState::Running;
        Some(Tick {
            generation: self.generation,
            step: 0,
            delay: Duration::ZERO,
        })
    }

    /// Deliver a tick. Reveals one visited cell and returns the next tick,
    /// scheduled with the delay current at this moment. After the last
    /// visited cell the whole path is revealed at once and `None` is
    /// returned.
    ///
    /// A tick from another generation, or delivered when no run is active,
    /// is a no-op.
    pub fn step(&mut self, tick: Tick, renderer: &mut impl Renderer) -> Option<Tick> {
        if tick.generation != self.generation || self.state != ReplayState::Running {
            log::trace!(
                "dropping stale tick (generation {}, current {})",
                tick.generation,
                self.generation
            );
            return None;
        }
        let Some(&coord) = self.result.visited.get(tick.step) else {
            return None;
        };
        self.paint(coord, CellType::Visited, renderer);

        let next = tick.step + 1;
        if next < self.result.visited.len() {
            return Some(Tick {
                generation: self.generation,
                step: next,
                delay: self.delay,
            });
        }

        self.finish(renderer);
        None
    }

    /// Stop the current run. Pending ticks become no-ops; the display keeps
    /// what was revealed so far.
    pub fn cancel(&mut self) {
        self.bump();
        if self.state == ReplayState::Running {
            log::debug!("replay cancelled");
            self.state = ReplayState::Cancelled;
        }
    }

    /// The logical grid was edited: drop any run and show `grid` afresh.
    pub fn reset(&mut self, grid: Grid, renderer: &mut impl Renderer) {
        self.bump();
        self.display = grid.without_marks();
        self.source = grid;
        self.result = SearchResult::default();
        self.state = ReplayState::Idle;
        renderer.reset(&self.display);
    }

    fn finish(&mut self, renderer: &mut impl Renderer) {
        let path = std::mem::take(&mut self.result.path);
        match path.len().checked_sub(1) {
            Some(moves) => {
                for &c in &path {
                    self.paint(c, CellType::Path, renderer);
                }
                renderer.notice(Notice::PathFound { moves });
            }
            None => renderer.notice(Notice::NoPath),
        }
        self.result.path = path;
        self.state = ReplayState::Done;
        log::debug!("replay {} done", self.generation);
    }

    /// Mark a display cell, leaving Start and End untouched.
    fn paint(&mut self, c: Coord, cell: CellType, renderer: &mut impl Renderer) {
        match self.display.at(c) {
            Some(current) if !current.is_endpoint() => {
                self.display.set(c, cell);
                renderer.reveal(RevealEvent { coord: c, cell });
            }
            _ => {}
        }
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
