use gridpath_core::Grid;

use crate::layout::{Layout, LayoutId, LayoutSummary, now_millis};
use crate::{LayoutStore, StoreError, checked_name, newest_first};

/// Layouts kept in memory for the lifetime of the store.
#[derive(Debug)]
pub struct MemoryStore {
    layouts: Vec<Layout>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            layouts: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStore for MemoryStore {
    fn save(&mut self, name: &str, grid: &Grid) -> Result<LayoutId, StoreError> {
        let name = checked_name(name)?;
        let id = LayoutId(self.next_id);
        self.next_id += 1;
        self.layouts.push(Layout {
            id,
            name,
            created_at: now_millis(),
            grid: grid.without_marks(),
        });
        log::info!("saved layout {id} in memory");
        Ok(id)
    }

    fn load(&self, id: LayoutId) -> Result<Layout, StoreError> {
        self.layouts
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<LayoutSummary>, StoreError> {
        let mut list: Vec<_> = self.layouts.iter().map(Layout::summary).collect();
        newest_first(&mut list);
        Ok(list)
    }
}
