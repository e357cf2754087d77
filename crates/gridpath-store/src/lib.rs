//! Persistence of named grid layouts.
//!
//! A layout is a grid saved under a user-chosen name. Stores hand out a
//! [`LayoutId`] on save, load layouts back by id, and list what they hold
//! newest first. Two implementations ship here:
//!
//! - [`MemoryStore`]: process-local, for tests and throwaway sessions
//! - [`JsonStore`]: one pretty-printed JSON document per layout in a directory
//!
//! Grids are stored as their integer code matrix. Loading re-validates the
//! matrix, so a hand-edited file with a bad code or a ragged row fails with
//! [`StoreError::Grid`] rather than producing a broken grid.

mod error;
mod json;
mod layout;
mod memory;

pub use error::StoreError;
pub use json::JsonStore;
pub use layout::{Layout, LayoutId, LayoutSummary};
pub use memory::MemoryStore;

use gridpath_core::Grid;

/// Save, load, and list named layouts.
pub trait LayoutStore {
    /// Store `grid` under `name` and return the new layout's id.
    ///
    /// Search marks (visited, path) are not part of a layout and are
    /// stripped before saving.
    fn save(&mut self, name: &str, grid: &Grid) -> Result<LayoutId, StoreError>;

    /// Load the layout saved under `id`.
    fn load(&self, id: LayoutId) -> Result<Layout, StoreError>;

    /// Summaries of every stored layout, newest first.
    fn list(&self) -> Result<Vec<LayoutSummary>, StoreError>;
}

/// Sort summaries newest first. Ids break ties between layouts saved within
/// the same millisecond.
pub(crate) fn newest_first(list: &mut [LayoutSummary]) {
    list.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Trimmed layout name, rejecting blank ones.
pub(crate) fn checked_name(name: &str) -> Result<String, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(name.to_owned())
}
