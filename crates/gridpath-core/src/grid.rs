//! The [`Grid`] type: a validated, row-major matrix of [`CellType`]s.
//!
//! A `Grid` handed to a search is a snapshot: algorithms borrow it
//! immutably and never see later edits. Editing goes through
//! [`GridEditor`](crate::GridEditor), progressive reveal through the replay
//! driver's own copy.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellType;
use crate::error::{Endpoint, EngineError, GridDefect};
use crate::geom::Coord;

/// A rectangular grid of cells with at most one Start and at most one End.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<CellType>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid of the given dimensions filled with [`CellType::Empty`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(GridDefect::Empty.into());
        }
        Ok(Self::blank(rows, cols))
    }

    /// Empty grid with non-zero dimensions already guaranteed by the caller.
    pub(crate) fn blank(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            cells: vec![CellType::Empty; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from a matrix of cells.
    pub fn from_cells(matrix: Vec<Vec<CellType>>) -> Result<Self, EngineError> {
        let (rows, cols) = dimensions(&matrix)?;
        let cells: Vec<CellType> = matrix.into_iter().flatten().collect();
        check_endpoints(&cells)?;
        Ok(Self { cells, rows, cols })
    }

    /// Build a grid from the persisted integer matrix. Any integer type
    /// is accepted so that values outside `u8` still surface as
    /// [`GridDefect::UnknownCode`].
    pub fn from_codes<C: Copy + Into<i64>>(matrix: &[Vec<C>]) -> Result<Self, EngineError> {
        let (rows, cols) = dimensions(matrix)?;
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in matrix.iter().enumerate() {
            for (col, &code) in line.iter().enumerate() {
                let code: i64 = code.into();
                let cell = u8::try_from(code)
                    .ok()
                    .and_then(CellType::from_code)
                    .ok_or(GridDefect::UnknownCode { row, col, code })?;
                cells.push(cell);
            }
        }
        check_endpoints(&cells)?;
        Ok(Self { cells, rows, cols })
    }

    /// Parse the text format: one line per row, one character per cell
    /// (see [`CellType::to_char`]). Whitespace around the whole text is
    /// ignored; every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        let mut matrix = Vec::new();
        for (row, line) in s.trim().lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let cell = CellType::from_char(ch).ok_or(GridDefect::UnknownChar { row, col, ch })?;
                cells.push(cell);
            }
            matrix.push(cells);
        }
        Self::from_cells(matrix)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a valid grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Convert a coordinate to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellType> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether a search may step onto `c`: in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(|cell| !cell.is_wall())
    }

    /// Set the cell at `c`, returning the previous value. No-op returning
    /// `None` if `c` is out of bounds.
    ///
    /// Endpoint uniqueness is not checked here. User edits go through
    /// [`GridEditor`](crate::GridEditor), which maintains it, and
    /// [`endpoints`](Self::endpoints) rejects a grid with two of either.
    pub fn set(&mut self, c: Coord, cell: CellType) -> Option<CellType> {
        let i = self.index(c)?;
        Some(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, c: Coord, cell: CellType) -> Self {
        self.set(c, cell);
        self
    }

    /// First cell of the given type in row-major order.
    pub fn find(&self, cell: CellType) -> Option<Coord> {
        self.cells.iter().position(|&c| c == cell).map(|i| self.coord(i))
    }

    /// Position of the Start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.find(CellType::Start)
    }

    /// Position of the End cell, if any.
    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.find(CellType::End)
    }

    /// Both endpoints. Fails with [`GridDefect::DuplicateEndpoint`] if
    /// either appears twice, then with [`EngineError::MissingEndpoint`].
    pub fn endpoints(&self) -> Result<(Coord, Coord), EngineError> {
        check_endpoints(&self.cells)?;
        let start = self
            .start()
            .ok_or(EngineError::MissingEndpoint(Endpoint::Start))?;
        let end = self.end().ok_or(EngineError::MissingEndpoint(Endpoint::End))?;
        Ok((start, end))
    }

    /// Return a copy with every Visited/Path mark turned back into Empty.
    pub fn without_marks(&self) -> Self {
        let mut g = self.clone();
        for cell in g.cells.iter_mut() {
            if cell.is_search_mark() {
                *cell = CellType::Empty;
            }
        }
        g
    }

    /// Row-major iterator over `(Coord, CellType)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellType)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord(i), cell))
    }

    /// The persisted integer matrix.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

fn dimensions<T>(matrix: &[Vec<T>]) -> Result<(usize, usize), GridDefect> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Err(GridDefect::Empty);
    }
    for (row, line) in matrix.iter().enumerate() {
        if line.len() != cols {
            return Err(GridDefect::Ragged {
                row,
                expected: cols,
                found: line.len(),
            });
        }
    }
    Ok((rows, cols))
}

fn check_endpoints(cells: &[CellType]) -> Result<(), GridDefect> {
    let count = |kind: CellType| cells.iter().filter(|&&c| c == kind).count();
    if count(CellType::Start) > 1 {
        return Err(GridDefect::DuplicateEndpoint(Endpoint::Start));
    }
    if count(CellType::End) > 1 {
        return Err(GridDefect::DuplicateEndpoint(Endpoint::End));
    }
    Ok(())
}

impl FromStr for Grid {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_codes().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let codes = Vec::<Vec<i64>>::deserialize(deserializer)?;
        Grid::from_codes(&codes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
S.#..
..#.E
.....";

    #[test]
    fn parse_and_query() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 5));
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        assert_eq!(g.end(), Some(Coord::new(1, 4)));
        assert_eq!(g.at(Coord::new(1, 2)), Some(CellType::Wall));
        assert_eq!(g.at(Coord::new(3, 0)), None);
        assert!(!g.is_passable(Coord::new(0, 2)));
        assert!(g.is_passable(Coord::new(1, 4)));
        assert!(!g.is_passable(Coord::new(-1, 0)));
    }

    #[test]
    fn display_inverts_parse() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!(g.to_string(), MAZE);
    }

    #[test]
    fn index_and_coord_agree() {
        let g = Grid::new(3, 4).unwrap();
        for (i, (c, _)) in g.iter().enumerate() {
            assert_eq!(g.index(c), Some(i));
            assert_eq!(g.coord(i), c);
        }
        assert_eq!(g.index(Coord::new(0, 4)), None);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Grid::new(0, 3), Err(EngineError::InvalidGrid(GridDefect::Empty)));
        assert_eq!(
            Grid::from_codes::<u8>(&[vec![]]),
            Err(EngineError::InvalidGrid(GridDefect::Empty))
        );
        assert!(Grid::parse("   \n ").is_err());
    }

    #[test]
    fn rejects_ragged() {
        let err = Grid::from_codes(&[vec![0, 0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidGrid(GridDefect::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_unknown_values() {
        let err = Grid::from_codes(&[vec![0, 7]]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidGrid(GridDefect::UnknownCode { row: 0, col: 1, code: 7 })
        );
        let err = Grid::from_codes(&[vec![0i64, 0], vec![300, 0]]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidGrid(GridDefect::UnknownCode { row: 1, col: 0, code: 300 })
        );
        assert_eq!(
            Grid::from_codes(&[vec![-1i64]]).unwrap_err(),
            EngineError::InvalidGrid(GridDefect::UnknownCode { row: 0, col: 0, code: -1 })
        );
        let err = Grid::parse("..x").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidGrid(GridDefect::UnknownChar { row: 0, col: 2, ch: 'x' })
        );
    }

    #[test]
    fn rejects_duplicate_endpoints() {
        assert_eq!(
            Grid::parse("S.S").unwrap_err(),
            EngineError::InvalidGrid(GridDefect::DuplicateEndpoint(Endpoint::Start))
        );
        assert_eq!(
            Grid::from_codes(&[vec![3, 2, 3]]).unwrap_err(),
            EngineError::InvalidGrid(GridDefect::DuplicateEndpoint(Endpoint::End))
        );
    }

    #[test]
    fn endpoints_missing() {
        let g = Grid::parse("S..").unwrap();
        assert_eq!(g.endpoints(), Err(EngineError::MissingEndpoint(Endpoint::End)));
        let g = Grid::parse("..E").unwrap();
        assert_eq!(g.endpoints(), Err(EngineError::MissingEndpoint(Endpoint::Start)));
    }

    #[test]
    fn endpoints_reject_duplicates_made_by_set() {
        let mut g = Grid::parse("S...E").unwrap();
        g.set(Coord::new(0, 2), CellType::Start);
        assert_eq!(
            g.endpoints(),
            Err(EngineError::InvalidGrid(GridDefect::DuplicateEndpoint(Endpoint::Start)))
        );
        let g = Grid::parse("S...E").unwrap().with(Coord::new(0, 1), CellType::End);
        assert_eq!(
            g.endpoints(),
            Err(EngineError::InvalidGrid(GridDefect::DuplicateEndpoint(Endpoint::End)))
        );
    }

    #[test]
    fn codes_round_trip() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!(Grid::from_codes(&g.to_codes()).unwrap(), g);
    }

    #[test]
    fn without_marks_clears_search_cells() {
        let g = Grid::parse("So*E").unwrap().without_marks();
        assert_eq!(g.to_string(), "S..E");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_code_matrix() {
        let g = Grid::parse("S#\n.E").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[2,1],[0,3]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn malformed_json_grid_is_rejected() {
        assert!(serde_json::from_str::<Grid>("[[0,1],[0]]").is_err());
        assert!(serde_json::from_str::<Grid>("[[0,9]]").is_err());
    }

    #[test]
    fn out_of_range_code_is_a_grid_defect() {
        let err = serde_json::from_str::<Grid>("[[0,300]]").unwrap_err();
        assert!(err.to_string().contains("unknown cell code 300 at (0, 1)"), "{err}");
    }
}
