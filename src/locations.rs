use std::collections::BTreeSet;

use crate::placement::Placement;

/// The set of grid cells covered by placed words, used to reveal or hide the
/// answers.
///
/// Backed by a `BTreeSet` so membership is cheap, crossings are stored once,
/// and iteration is row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterLocations {
    cells: BTreeSet<(usize, usize)>,
}

impl LetterLocations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `(row, col)` as part of a placed word. Returns `false` if it was
    /// already marked (e.g. where two words cross).
    pub fn record(&mut self, row: usize, col: usize) -> bool {
        self.cells.insert((row, col))
    }

    /// Mark every cell a placement covers.
    pub fn record_placement(&mut self, placement: &Placement) {
        for (row, col) in placement.cells() {
            self.record(row, col);
        }
    }

    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    pub fn reset(&mut self) {
        self.cells.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }
}

impl<'a> FromIterator<&'a Placement> for LetterLocations {
    fn from_iter<I: IntoIterator<Item = &'a Placement>>(iter: I) -> Self {
        let mut locations = LetterLocations::new();
        for placement in iter {
            locations.record_placement(placement);
        }
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn test_record_and_contains() {
        let mut locations = LetterLocations::new();
        assert!(locations.is_empty());
        assert!(locations.record(1, 2));
        assert!(locations.contains(1, 2));
        assert!(!locations.contains(2, 1));
        assert_eq!(locations.len(), 1);
    }

    #[test]
    fn test_record_deduplicates() {
        let mut locations = LetterLocations::new();
        assert!(locations.record(0, 0));
        assert!(!locations.record(0, 0));
        assert_eq!(locations.len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut locations = LetterLocations::new();
        locations.record(0, 0);
        locations.record(3, 3);
        locations.reset();
        assert!(locations.is_empty());
        assert!(!locations.contains(3, 3));
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut locations = LetterLocations::new();
        locations.record(2, 0);
        locations.record(0, 1);
        locations.record(0, 0);
        assert_eq!(locations.iter().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (2, 0)]);
    }

    #[test]
    fn test_crossing_placements_share_cells() {
        let across = Placement { word_index: 0, row: 0, col: 0, direction: Direction::Right, len: 3 };
        let down = Placement { word_index: 1, row: 0, col: 1, direction: Direction::Down, len: 3 };
        let locations: LetterLocations = [across, down].iter().collect();
        // 3 + 3 cells, one shared at (0, 1)
        assert_eq!(locations.len(), 5);
        assert!(locations.contains(0, 1));
        assert!(locations.contains(2, 1));
    }
}
