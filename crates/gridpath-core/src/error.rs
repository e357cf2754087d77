//! Errors reported when input is rejected before a search runs.
//!
//! An unreachable end is not an error: the search succeeds with an empty
//! path and callers surface it as "no path found".

use std::fmt;

use crate::geom::Coord;

/// Which endpoint marker an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Why a grid failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridDefect {
    #[error("grid has no rows or no columns")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell code {code} at ({row}, {col})")]
    UnknownCode { row: usize, col: usize, code: i64 },

    #[error("unknown cell character \u{201c}{ch}\u{201d} at ({row}, {col})")]
    UnknownChar { row: usize, col: usize, ch: char },

    #[error("more than one {0} cell")]
    DuplicateEndpoint(Endpoint),
}

/// Errors raised at the engine boundary. None of them is fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridDefect),

    #[error("grid has no {0} cell")]
    MissingEndpoint(Endpoint),

    #[error("unknown cell code {0}")]
    UnknownCellCode(u8),

    #[error("unknown algorithm \u{201c}{0}\u{201d}")]
    UnknownAlgorithm(String),

    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),
}
