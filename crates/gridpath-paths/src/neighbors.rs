use gridpath_core::{Coord, Grid};

/// Passable orthogonal neighbours of `c`, in canonical order
/// (up, down, left, right).
///
/// A candidate is kept iff it lies inside the grid and is not a wall.
pub fn neighbors(grid: &Grid, c: Coord) -> Vec<Coord> {
    let mut nb = Neighbors::new();
    nb.passable(grid, c).to_vec()
}

/// Cached neighbor computation helper.
///
/// Reuses one buffer across calls so a search loop does not allocate per
/// expansion.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbours of `c` in canonical order,
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Neighbours of `c` a search may step onto.
    pub fn passable(&mut self, grid: &Grid, c: Coord) -> &[Coord] {
        self.cardinal(c, |n| grid.is_passable(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_four_in_order() {
        let g = Grid::new(3, 3).unwrap();
        let c = Coord::new(1, 1);
        assert_eq!(
            neighbors(&g, c),
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2)
            ]
        );
    }

    #[test]
    fn corner_drops_out_of_bounds() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            neighbors(&g, Coord::new(0, 0)),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
        assert_eq!(
            neighbors(&g, Coord::new(2, 2)),
            vec![Coord::new(1, 2), Coord::new(2, 1)]
        );
    }

    #[test]
    fn walls_are_filtered_endpoints_are_not() {
        let g = Grid::parse(".#.\nS.E\n.#.").unwrap();
        assert_eq!(
            neighbors(&g, Coord::new(1, 1)),
            vec![Coord::new(1, 0), Coord::new(1, 2)]
        );
    }

    #[test]
    fn buffer_is_reused() {
        let g = Grid::new(2, 2).unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(nb.passable(&g, Coord::new(0, 0)).len(), 2);
        assert_eq!(nb.cardinal(Coord::new(0, 0), |_| false).len(), 0);
    }
}
