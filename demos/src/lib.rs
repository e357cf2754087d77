//! The `gridpath` terminal visualizer.
//!
//! Builds a starting grid from a text file, a saved layout, or an empty
//! square with optional random walls, then either opens the interactive
//! editor or runs one search headlessly and prints the result.

pub mod cli;
pub mod config;
pub mod headless;
pub mod interactive;
pub mod walls;

use std::error::Error;
use std::fs;

use gridpath_core::{CellType, Coord, Grid, GridEditor};
use gridpath_store::LayoutStore;

use crate::cli::Args;
use crate::config::DemoConfig;

/// The grid the session starts from.
///
/// A generated grid gets Start in the top-left and End in the bottom-right
/// corner before walls are scattered, so it is runnable right away.
pub fn starting_grid(
    args: &Args,
    cfg: &DemoConfig,
    store: &impl LayoutStore,
) -> Result<Grid, Box<dyn Error>> {
    if let Some(path) = &args.grid_file {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read grid {}: {e}", path.display()))?;
        return Ok(Grid::parse(&text)?);
    }
    if let Some(id) = args.load {
        return Ok(store.load(id)?.grid);
    }

    let mut grid = GridEditor::new(cfg.grid_size).snapshot();
    let last = Coord::new(grid.rows() as i32 - 1, grid.cols() as i32 - 1);
    grid.set(Coord::ZERO, CellType::Start);
    grid.set(last, CellType::End);

    if cfg.random_walls > 0 {
        let (mut rng, _) = walls::seeded_rng(cfg.seed);
        grid = walls::scatter_walls(&grid, cfg.random_walls, &mut rng);
    }
    Ok(grid)
}
