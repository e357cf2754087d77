use std::fs;
use std::path::{Path, PathBuf};

use gridpath_core::Grid;
use serde::{Deserialize, Serialize};

use crate::layout::{Layout, LayoutId, LayoutSummary, now_millis};
use crate::{LayoutStore, StoreError, checked_name, newest_first};

const PREFIX: &str = "layout-";
const SUFFIX: &str = ".json";

/// On-disk document. The grid stays a raw code matrix until it is
/// validated by [`Grid::from_codes`]; codes are read as `i64` so any
/// integer, in range or not, reaches that check.
#[derive(Serialize, Deserialize)]
struct Record {
    id: LayoutId,
    name: String,
    created_at: u64,
    grid: Vec<Vec<i64>>,
}

/// A directory of `layout-<id>.json` documents.
#[derive(Debug)]
pub struct JsonStore {
    dir: PathBuf,
    next_id: u64,
}

impl JsonStore {
    /// Open the store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        let last = ids_in(&dir)?.into_iter().max().map_or(0, |id| id.0);
        log::debug!("opened layout store {} (last id {last})", dir.display());
        Ok(Self {
            dir,
            next_id: last + 1,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: LayoutId) -> PathBuf {
        self.dir.join(format!("{PREFIX}{id}{SUFFIX}"))
    }

    fn read(&self, id: LayoutId) -> Result<Record, StoreError> {
        let path = self.path_for(id);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id));
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&json).map_err(|source| StoreError::Json { path, source })
    }
}

impl LayoutStore for JsonStore {
    fn save(&mut self, name: &str, grid: &Grid) -> Result<LayoutId, StoreError> {
        let name = checked_name(name)?;
        let id = LayoutId(self.next_id);
        let record = Record {
            id,
            name,
            created_at: now_millis(),
            grid: grid
                .without_marks()
                .to_codes()
                .into_iter()
                .map(|row| row.into_iter().map(i64::from).collect())
                .collect(),
        };
        let path = self.path_for(id);
        let json = serde_json::to_string_pretty(&record).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        // Write aside, then rename into place.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        self.next_id += 1;
        log::info!("saved layout {id} \u{201c}{}\u{201d} to {}", record.name, path.display());
        Ok(id)
    }

    fn load(&self, id: LayoutId) -> Result<Layout, StoreError> {
        let record = self.read(id)?;
        let grid = Grid::from_codes(&record.grid)?;
        Ok(Layout {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
            grid,
        })
    }

    fn list(&self) -> Result<Vec<LayoutSummary>, StoreError> {
        let mut list = Vec::new();
        for id in ids_in(&self.dir)? {
            match self.read(id) {
                Ok(r) => list.push(LayoutSummary {
                    id: r.id,
                    name: r.name,
                    created_at: r.created_at,
                }),
                Err(e) => log::warn!("skipping layout {id}: {e}"),
            }
        }
        newest_first(&mut list);
        Ok(list)
    }
}

/// Ids of every `layout-<id>.json` file in `dir`. Other files are ignored.
fn ids_in(dir: &Path) -> Result<Vec<LayoutId>, StoreError> {
    let entries = fs::read_dir(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let id = name
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .and_then(|n| n.parse::<u64>().ok());
        if let Some(id) = id {
            ids.push(LayoutId(id));
        }
    }
    Ok(ids)
}
