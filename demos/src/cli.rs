//! Command-line flags.

use std::path::PathBuf;
use std::str::FromStr;

use gridpath_store::LayoutId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown argument: {0}")]
    Unknown(String),

    #[error("{0} needs a value")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value}")]
    BadValue { flag: String, value: String },

    #[error("--save needs --headless; press s to save from the editor")]
    SaveWithoutHeadless,
}

/// Parsed command line. `None` leaves the config value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub config_path: Option<PathBuf>,
    pub algorithm: Option<String>,
    pub speed: Option<u32>,
    pub grid_size: Option<usize>,
    pub random_walls: Option<u32>,
    pub seed: Option<u64>,
    pub store_dir: Option<PathBuf>,
    pub layout_name: Option<String>,
    /// Text grid to start from.
    pub grid_file: Option<PathBuf>,
    /// Saved layout to start from.
    pub load: Option<LayoutId>,
    pub list: bool,
    pub save: bool,
    pub headless: bool,
    pub help: bool,
}

/// Parse flags, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(flag) = it.next() {
        match flag.as_str() {
            "--config" | "-c" => out.config_path = Some(value(&flag, &mut it)?.into()),
            "--algorithm" | "-a" => out.algorithm = Some(value(&flag, &mut it)?),
            "--speed" | "-s" => out.speed = Some(parsed(&flag, &mut it)?),
            "--size" | "-n" => out.grid_size = Some(parsed(&flag, &mut it)?),
            "--walls" | "-w" => out.random_walls = Some(parsed(&flag, &mut it)?),
            "--seed" => out.seed = Some(parsed(&flag, &mut it)?),
            "--store" => out.store_dir = Some(value(&flag, &mut it)?.into()),
            "--name" => out.layout_name = Some(value(&flag, &mut it)?),
            "--grid" | "-g" => out.grid_file = Some(value(&flag, &mut it)?.into()),
            "--load" | "-l" => out.load = Some(parsed(&flag, &mut it)?),
            "--list" => out.list = true,
            "--save" => out.save = true,
            "--headless" => out.headless = true,
            "--help" | "-h" => out.help = true,
            _ => return Err(CliError::Unknown(flag)),
        }
    }
    if out.save && !out.headless && !out.help {
        return Err(CliError::SaveWithoutHeadless);
    }
    Ok(out)
}

fn value(flag: &str, it: &mut impl Iterator<Item = String>) -> Result<String, CliError> {
    it.next().ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

fn parsed<T: FromStr>(flag: &str, it: &mut impl Iterator<Item = String>) -> Result<T, CliError> {
    let v = value(flag, it)?;
    v.parse().map_err(|_| CliError::BadValue {
        flag: flag.to_string(),
        value: v,
    })
}

pub const HELP: &str = "\
gridpath - grid pathfinding visualizer

USAGE:
    gridpath [OPTIONS]

OPTIONS:
    -c, --config <FILE>       Configuration file (gridpath.toml)
    -a, --algorithm <NAME>    bfs, dfs, dijkstra, a* (bfs)
    -s, --speed <1-100>       Replay speed (50)
    -n, --size <5-50>         Grid side length (20)
    -w, --walls <0-100>       Percentage of random walls (0)
        --seed <N>            Seed for random walls
    -g, --grid <FILE>         Start from a text grid (. # S E)
    -l, --load <ID>           Start from a saved layout
        --store <DIR>         Layout store directory (layouts)
        --name <NAME>         Name used when saving (untitled)
        --list                List saved layouts and exit
        --save                Save the starting layout (with --headless)
        --headless            Search and print the result without a UI
    -h, --help                Print help information

KEYS:
    click       place start, then end, then toggle walls
    r / Enter   run          + / f   faster
    a / Tab     algorithm    x       clear search
    [ / ]       resize       c       reset grid
    s           save         q / Esc quit or cancel";
