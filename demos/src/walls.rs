//! Random wall placement for a quick starting layout.

use std::time::{SystemTime, UNIX_EPOCH};

use gridpath_core::{CellType, Grid};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Turn roughly `percent` of the empty cells of `grid` into walls. Start,
/// End and existing walls are left alone.
pub fn scatter_walls<R: Rng>(grid: &Grid, percent: u32, rng: &mut R) -> Grid {
    let mut out = grid.clone();
    if percent == 0 {
        return out;
    }
    for (c, cell) in grid.iter() {
        if cell == CellType::Empty && rng.random_range(0..100u32) < percent {
            out.set(c, CellType::Wall);
        }
    }
    out
}

/// A seeded generator. Without a seed one is taken from the clock and
/// logged so the layout can be reproduced.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("wall seed {seed}");
    (StdRng::seed_from_u64(seed), seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Coord;

    fn count(grid: &Grid, cell: CellType) -> usize {
        grid.iter().filter(|&(_, c)| c == cell).count()
    }

    #[test]
    fn same_seed_same_walls() {
        let grid = Grid::new(20, 20).unwrap();
        let (mut a, _) = seeded_rng(Some(42));
        let (mut b, _) = seeded_rng(Some(42));
        assert_eq!(scatter_walls(&grid, 30, &mut a), scatter_walls(&grid, 30, &mut b));
    }

    #[test]
    fn bounds() {
        let grid = Grid::parse("S....\n.....\n....E").unwrap();
        let (mut rng, _) = seeded_rng(Some(1));

        assert_eq!(scatter_walls(&grid, 0, &mut rng), grid);

        let full = scatter_walls(&grid, 100, &mut rng);
        assert_eq!(count(&full, CellType::Wall), 13);
        assert_eq!(full.at(Coord::new(0, 0)), Some(CellType::Start));
        assert_eq!(full.at(Coord::new(2, 4)), Some(CellType::End));
    }

    #[test]
    fn density_is_roughly_respected() {
        let grid = Grid::new(50, 50).unwrap();
        let (mut rng, _) = seeded_rng(Some(7));
        let walls = count(&scatter_walls(&grid, 30, &mut rng), CellType::Wall);
        assert!((500..1000).contains(&walls), "{walls} walls");
    }
}
