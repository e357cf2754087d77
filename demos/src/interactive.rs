//! The interactive terminal editor: click to edit, run to watch the search.

use std::error::Error;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gridpath_core::editor::{MAX_SIZE, MIN_SIZE};
use gridpath_core::{Coord, GridEditor};
use gridpath_crossterm::{Command, Session, TerminalRenderer, Viewport, read_command};
use gridpath_paths::Algorithm;
use gridpath_replay::{ReplayControl, ReplayDriver, Speed, run_realtime};
use gridpath_store::LayoutStore;

const IDLE_POLL: Duration = Duration::from_millis(100);
const REPLAY_POLL: Duration = Duration::from_millis(16);

/// Screen offset of the grid's top-left cell.
const LEFT: u16 = 1;
const TOP: u16 = 1;

/// What the screen needs after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Nothing,
    Cell(Coord),
    Grid,
    Status(String),
    Run,
    Quit,
}

/// Editor state plus the settings the user can change while it runs.
pub struct Visualizer<S> {
    editor: GridEditor,
    algorithm: Algorithm,
    speed: Speed,
    store: S,
    layout_name: String,
}

impl<S: LayoutStore> Visualizer<S> {
    pub fn new(
        editor: GridEditor,
        algorithm: Algorithm,
        speed: Speed,
        store: S,
        layout_name: impl Into<String>,
    ) -> Self {
        Self {
            editor,
            algorithm,
            speed,
            store,
            layout_name: layout_name.into(),
        }
    }

    pub fn editor(&self) -> &GridEditor {
        &self.editor
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply every command that needs no terminal I/O.
    pub fn apply(&mut self, cmd: Command) -> Update {
        match cmd {
            Command::Quit => Update::Quit,
            Command::Run => Update::Run,
            Command::Click(c) => match self.editor.click(c) {
                Some(_) => Update::Cell(c),
                None => Update::Nothing,
            },
            Command::Reset => {
                self.editor.reset();
                Update::Grid
            }
            Command::ClearSearch => {
                self.editor.clear_search();
                Update::Grid
            }
            Command::Grow => self.resize(1),
            Command::Shrink => self.resize(-1),
            Command::NextAlgorithm => {
                let i = Algorithm::ALL
                    .iter()
                    .position(|&a| a == self.algorithm)
                    .unwrap_or(0);
                self.algorithm = Algorithm::ALL[(i + 1) % Algorithm::ALL.len()];
                Update::Status(format!(
                    "{}: {}",
                    self.algorithm,
                    self.algorithm.description()
                ))
            }
            Command::Faster => {
                self.speed = self.speed.faster();
                Update::Status(format!("Speed: {}", self.speed))
            }
            Command::Save => match self.store.save(&self.layout_name, self.editor.grid()) {
                Ok(id) => Update::Status(format!(
                    "Saved layout {id} \u{201c}{}\u{201d}",
                    self.layout_name
                )),
                Err(e) => {
                    log::warn!("save failed: {e}");
                    Update::Status(format!("Failed to save layout: {e}"))
                }
            },
        }
    }

    /// One-line summary of the current settings and keys.
    pub fn summary(&self) -> String {
        let g = self.editor.grid();
        format!(
            "{} | speed {} | {}x{} | r run  a algorithm  + faster  s save  q quit",
            self.algorithm,
            self.speed,
            g.rows(),
            g.cols()
        )
    }

    /// Resize by `delta` cells per side. The grid is cleared, as with the
    /// size slider, unless the size is already at its bound.
    fn resize(&mut self, delta: isize) -> Update {
        let current = self.editor.grid().rows();
        let wanted = current.saturating_add_signed(delta).clamp(MIN_SIZE, MAX_SIZE);
        if wanted == current {
            return Update::Nothing;
        }
        self.editor.resize(wanted);
        Update::Grid
    }
}

/// Run the editor until the user quits.
pub fn run_interactive<S: LayoutStore>(mut vis: Visualizer<S>) -> Result<(), Box<dyn Error>> {
    let _session = Session::enter(true)?;
    let mut renderer = TerminalRenderer::new(io::stdout(), Viewport::fit(vis.editor.grid(), LEFT, TOP));
    redraw(&vis, &mut renderer)?;

    loop {
        let Some(cmd) = read_command(&renderer.viewport(), IDLE_POLL)? else {
            continue;
        };
        match vis.apply(cmd) {
            Update::Quit => break,
            Update::Nothing => {}
            Update::Cell(c) => {
                if let Some(cell) = vis.editor.grid().at(c) {
                    renderer.draw_cell(c, cell)?;
                }
            }
            Update::Grid => redraw(&vis, &mut renderer)?,
            Update::Status(text) => {
                renderer.status(&text)?;
                renderer.info(&vis.summary())?;
            }
            Update::Run => replay(&mut vis, &mut renderer)?,
        }
    }
    Ok(())
}

fn redraw<S: LayoutStore>(vis: &Visualizer<S>, renderer: &mut TerminalRenderer<Stdout>) -> io::Result<()> {
    let grid = vis.editor.grid();
    renderer.set_viewport(Viewport::fit(grid, LEFT, TOP));
    renderer.draw_grid(grid)?;
    renderer.info(&vis.summary())
}

/// Search the current grid and replay it, listening for speed-up and
/// cancel keys on a second thread while the replay sleeps.
fn replay<S: LayoutStore>(
    vis: &mut Visualizer<S>,
    renderer: &mut TerminalRenderer<Stdout>,
) -> Result<(), Box<dyn Error>> {
    vis.editor.clear_search();
    let grid = vis.editor.snapshot();
    let (start, end) = match grid.endpoints() {
        Ok(ends) => ends,
        Err(e) => {
            log::debug!("not running: {e}");
            redraw(vis, renderer)?;
            renderer.status("Please set both start and end points before visualizing")?;
            return Ok(());
        }
    };

    let result = vis.algorithm.run(&grid, start, end);
    let mut driver = ReplayDriver::new(grid);
    let control = ReplayControl::new(vis.speed.delay());
    let done = AtomicBool::new(false);
    let viewport = renderer.viewport();
    let speed = vis.speed;

    let (finished, speed) = std::thread::scope(|s| {
        let input = s.spawn(|| watch_input(&viewport, &control, &done, speed));

        let first = driver.start(result, control.delay(), renderer);
        let info = renderer.info("Visualizing... + faster  q cancel");
        let finished = run_realtime(&mut driver, first, renderer, &control);
        done.store(true, Ordering::Relaxed);

        let speed = match input.join() {
            Ok(Ok(speed)) => speed,
            Ok(Err(e)) => {
                log::warn!("input error during replay: {e}");
                speed
            }
            Err(_) => speed,
        };
        info.map(|()| (finished, speed))
    })?;

    vis.speed = speed;
    if let Some(e) = renderer.take_error() {
        return Err(e.into());
    }
    if finished {
        vis.editor.load(driver.display().clone());
        renderer.info(&vis.summary())?;
    } else {
        redraw(vis, renderer)?;
        renderer.status("Cancelled")?;
    }
    Ok(())
}

fn watch_input(
    viewport: &Viewport,
    control: &ReplayControl,
    done: &AtomicBool,
    mut speed: Speed,
) -> io::Result<Speed> {
    while !done.load(Ordering::Relaxed) {
        match read_command(viewport, REPLAY_POLL)? {
            Some(Command::Quit) => control.cancel(),
            Some(Command::Faster) => {
                speed = speed.faster();
                control.set_delay(speed.delay());
            }
            _ => {}
        }
    }
    Ok(speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::CellType;
    use gridpath_store::MemoryStore;

    fn visualizer() -> Visualizer<MemoryStore> {
        Visualizer::new(
            GridEditor::new(5),
            Algorithm::Bfs,
            Speed::default(),
            MemoryStore::new(),
            "demo",
        )
    }

    #[test]
    fn clicks_place_start_end_then_walls() {
        let mut vis = visualizer();
        let c = |r, k| Coord::new(r, k);
        assert_eq!(vis.apply(Command::Click(c(0, 0))), Update::Cell(c(0, 0)));
        vis.apply(Command::Click(c(4, 4)));
        vis.apply(Command::Click(c(2, 2)));
        let g = vis.editor().grid();
        assert_eq!(g.at(c(0, 0)), Some(CellType::Start));
        assert_eq!(g.at(c(4, 4)), Some(CellType::End));
        assert_eq!(g.at(c(2, 2)), Some(CellType::Wall));
        assert_eq!(vis.apply(Command::Click(c(9, 9))), Update::Nothing);
    }

    #[test]
    fn algorithm_cycles() {
        let mut vis = visualizer();
        let mut seen = Vec::new();
        for _ in 0..4 {
            vis.apply(Command::NextAlgorithm);
            seen.push(vis.algorithm());
        }
        assert_eq!(
            seen,
            vec![Algorithm::Dfs, Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Bfs]
        );
    }

    #[test]
    fn faster_raises_speed() {
        let mut vis = visualizer();
        assert_eq!(vis.apply(Command::Faster), Update::Status("Speed: 60%".into()));
        assert_eq!(vis.speed().percent(), 60);
    }

    #[test]
    fn resize_is_clamped() {
        let mut vis = visualizer();
        assert_eq!(vis.apply(Command::Shrink), Update::Nothing);
        assert_eq!(vis.editor().grid().rows(), 5);
        assert_eq!(vis.apply(Command::Grow), Update::Grid);
        assert_eq!(vis.editor().grid().cols(), 6);
    }

    #[test]
    fn save_goes_to_store() {
        let mut vis = visualizer();
        vis.apply(Command::Click(Coord::new(1, 1)));
        let update = vis.apply(Command::Save);
        assert_eq!(update, Update::Status("Saved layout 1 \u{201c}demo\u{201d}".into()));
        let list = vis.store().list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "demo");
    }

    #[test]
    fn summary_mentions_settings() {
        let vis = visualizer();
        assert!(vis.summary().starts_with("BFS | speed 50% | 5x5"));
    }
}
