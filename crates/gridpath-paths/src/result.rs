use gridpath_core::Coord;

/// Outcome of one search.
///
/// `visited` lists cells in the order they were finalized (popped for the
/// first time); its first element is the start. `path` runs from start to
/// end inclusive and is empty iff the end was unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Vec<Coord>,
    pub visited: Vec<Coord>,
}

impl SearchResult {
    /// Whether a route to the end was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, or `None` if no path was found.
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}
