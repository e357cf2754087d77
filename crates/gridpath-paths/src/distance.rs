use gridpath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Exact for an obstacle-free 4-connected unit-cost grid, hence admissible
/// and consistent as an A* heuristic.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}
