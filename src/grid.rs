use std::fmt;
use std::fmt::{Display, Formatter};

/// Character shown for an empty cell in [`Grid::to_strings`].
pub const EMPTY_CELL_CHAR: char = '.';

/// Largest grid side the generator accepts.
pub const MAX_GRID_SIZE: usize = 1024;

/// A square grid of letters. `None` marks a cell nothing has been written to yet.
///
/// Cells are stored row-major in a flat `Vec` since the size is fixed for the
/// grid's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size` × `size` grid.
    ///
    /// # Panics
    /// If `size * size` overflows `usize`. Use [`Grid::try_new`] for sizes
    /// that come from user input.
    #[must_use]
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(grid) => grid,
            None => panic!("grid size {size} overflows the cell count"),
        }
    }

    /// Create an empty grid, or `None` if the cell count overflows `usize`.
    #[must_use]
    pub fn try_new(size: usize) -> Option<Self> {
        let cell_count = size.checked_mul(size)?;
        Some(Self {
            size,
            cells: vec![None; cell_count],
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff `0 <= row < N` and `0 <= col < N`.
    ///
    /// Takes signed coordinates so callers can step off the edge while walking
    /// a direction and ask afterwards.
    #[must_use]
    pub fn within_bounds(&self, row: isize, col: isize) -> bool {
        usize::try_from(row).is_ok_and(|r| r < self.size)
            && usize::try_from(col).is_ok_and(|c| c < self.size)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for size {}",
            self.size
        );
        row * self.size + col
    }

    /// The letter at `(row, col)`, or `None` if the cell is empty.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells[self.index(row, col)]
    }

    /// Write `letter` into `(row, col)`, replacing whatever was there.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, letter: char) {
        let i = self.index(row, col);
        self.cells[i] = Some(letter);
    }

    /// Empty the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    pub fn clear(&mut self, row: usize, col: usize) {
        let i = self.index(row, col);
        self.cells[i] = None;
    }

    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of cells that still hold no letter.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Iterate over the rows, each a slice of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // size 0 would make chunks() panic
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Every `(row, col)` pair in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// One string per row; empty cells are shown as [`EMPTY_CELL_CHAR`].
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.unwrap_or(EMPTY_CELL_CHAR)).collect())
            .collect()
    }

    /// Read `len` letters starting at `(row, col)` and stepping by `(dr, dc)`.
    /// Returns `None` if the walk leaves the grid or hits an empty cell.
    #[must_use]
    pub fn read_line(&self, row: isize, col: isize, (dr, dc): (isize, isize), len: usize) -> Option<String> {
        let mut out = String::with_capacity(len);
        let (mut r, mut c) = (row, col);
        for _ in 0..len {
            if !self.within_bounds(r, c) {
                return None;
            }
            out.push(self.get(r.unsigned_abs(), c.unsigned_abs())?);
            r += dr;
            c += dc;
        }
        Some(out)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|c| c.unwrap_or(EMPTY_CELL_CHAR).to_string())
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.empty_count(), 16);
        assert!(!grid.is_full());
        assert!(grid.coordinates().all(|(r, c)| grid.is_empty_at(r, c)));
    }

    #[test]
    fn test_within_bounds_matches_definition() {
        for size in 1..=5usize {
            let grid = Grid::new(size);
            let n = size as isize;
            for row in -3..n + 3 {
                for col in -3..n + 3 {
                    let expected = (0..n).contains(&row) && (0..n).contains(&col);
                    assert_eq!(grid.within_bounds(row, col), expected, "size={size} row={row} col={col}");
                }
            }
        }
    }

    #[test]
    fn test_set_get_clear() {
        let mut grid = Grid::new(3);
        grid.set(1, 2, 'Q');
        assert_eq!(grid.get(1, 2), Some('Q'));
        assert_eq!(grid.get(2, 1), None);
        grid.clear(1, 2);
        assert!(grid.is_empty_at(1, 2));
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new(2);
        for (r, c) in grid.coordinates().collect::<Vec<_>>() {
            grid.set(r, c, 'A');
        }
        assert!(grid.is_full());
        assert_eq!(grid.empty_count(), 0);
    }

    #[test]
    fn test_to_strings_and_display() {
        let mut grid = Grid::new(2);
        grid.set(0, 0, 'A');
        grid.set(1, 1, 'B');
        assert_eq!(grid.to_strings(), vec!["A.", ".B"]);
        assert_eq!(grid.to_string(), "A .\n. B");
    }

    #[test]
    fn test_read_line() {
        let mut grid = Grid::new(3);
        grid.set(2, 0, 'C');
        grid.set(1, 1, 'A');
        grid.set(0, 2, 'T');
        assert_eq!(grid.read_line(2, 0, (-1, 1), 3).as_deref(), Some("CAT"));
        // walks off the grid
        assert_eq!(grid.read_line(2, 0, (-1, 1), 4), None);
        // hits an empty cell
        assert_eq!(grid.read_line(0, 0, (0, 1), 3), None);
    }

    #[test]
    fn test_try_new_rejects_overflowing_size() {
        assert!(Grid::try_new(usize::MAX).is_none());
        assert!(Grid::try_new(1 << (usize::BITS / 2)).is_none());
        assert_eq!(Grid::try_new(3), Some(Grid::new(3)));
    }

    #[test]
    fn test_zero_size_grid() {
        let grid = Grid::new(0);
        assert_eq!(grid.rows().count(), 0);
        assert!(grid.is_full());
        assert!(!grid.within_bounds(0, 0));
    }
}
