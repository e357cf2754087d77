use std::path::PathBuf;

use gridpath_core::EngineError;
use thiserror::Error;

use crate::layout::LayoutId;

/// Errors returned by a [`LayoutStore`](crate::LayoutStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no layout with id {0}")]
    NotFound(LayoutId),

    #[error("layout name is empty")]
    EmptyName,

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed layout document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored grid is invalid: {0}")]
    Grid(#[from] EngineError),
}
