//! Demo configuration: a TOML file, then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use gridpath_core::EngineError;
use gridpath_core::editor::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use gridpath_paths::Algorithm;
use gridpath_replay::Speed;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Args;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "gridpath.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Everything the demo can be told before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Algorithm name, parsed with [`Algorithm::from_str`](std::str::FromStr).
    pub algorithm: String,
    /// Replay speed, `1..=100`.
    pub speed: u32,
    /// Side of the square grid the editor starts with.
    pub grid_size: usize,
    /// Percentage of cells turned into walls at startup.
    pub random_walls: u32,
    /// Seed for the wall scatter. A time-based seed is used when unset.
    pub seed: Option<u64>,
    /// Directory of the JSON layout store.
    pub store_dir: PathBuf,
    /// Name used when saving a layout.
    pub layout_name: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            algorithm: "bfs".to_string(),
            speed: u32::from(Speed::default().percent()),
            grid_size: DEFAULT_SIZE,
            random_walls: 0,
            seed: None,
            store_dir: PathBuf::from("layouts"),
            layout_name: "untitled".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut cfg: DemoConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.normalize();
        Ok(cfg)
    }

    /// The configured algorithm.
    pub fn algorithm(&self) -> Result<Algorithm, EngineError> {
        self.algorithm.parse()
    }

    pub fn speed(&self) -> Speed {
        Speed::new(self.speed)
    }

    /// Clamp numeric fields into their accepted ranges.
    fn normalize(&mut self) {
        self.grid_size = self.grid_size.clamp(MIN_SIZE, MAX_SIZE);
        self.speed = self.speed.clamp(1, 100);
        self.random_walls = self.random_walls.min(100);
    }
}

/// Load the config named by `args`, or `gridpath.toml` if it exists, then
/// apply the command-line overrides. An unknown algorithm name is reported
/// here rather than when the first search runs.
pub fn load_config(args: &Args) -> Result<DemoConfig, ConfigError> {
    let cfg = match &args.config_path {
        Some(path) => read(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                read(path)?
            } else {
                DemoConfig::default()
            }
        }
    };
    let cfg = apply_overrides(cfg, args);
    cfg.algorithm()?;
    Ok(cfg)
}

fn read(path: &Path) -> Result<DemoConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = DemoConfig::from_toml(&text, path)?;
    log::info!("loaded config from {}", path.display());
    Ok(cfg)
}

pub fn apply_overrides(mut cfg: DemoConfig, args: &Args) -> DemoConfig {
    if let Some(a) = &args.algorithm {
        cfg.algorithm = a.clone();
    }
    if let Some(s) = args.speed {
        cfg.speed = s;
    }
    if let Some(n) = args.grid_size {
        cfg.grid_size = n;
    }
    if let Some(w) = args.random_walls {
        cfg.random_walls = w;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(dir) = &args.store_dir {
        cfg.store_dir = dir.clone();
    }
    if let Some(name) = &args.layout_name {
        cfg.layout_name = name.clone();
    }
    cfg.normalize();
    cfg
}
