//! **gridpath-core**: the grid model shared by the gridpath crates.
//!
//! This crate provides the foundational types of the pathfinding engine:
//! cell states, grid coordinates, the immutable [`Grid`] snapshot handed to
//! the search algorithms, the interactive [`GridEditor`] that produces those
//! snapshots, and the [`EngineError`] type reported when input is rejected.

pub mod cell;
pub mod editor;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellType;
pub use editor::{Edit, GridEditor};
pub use error::{Endpoint, EngineError, GridDefect};
pub use geom::Coord;
pub use grid::Grid;
