use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::grid::Grid;

/// Fill every empty cell with a letter drawn uniformly from `alphabet`.
/// Cells that already hold a letter are left alone.
///
/// Returns the number of cells filled. An empty alphabet fills nothing.
pub fn fill_gaps<R: Rng>(grid: &mut Grid, alphabet: &Alphabet, rng: &mut R) -> usize {
    let letters = alphabet.letters();
    let mut filled = 0;
    for (row, col) in grid.coordinates().collect::<Vec<_>>() {
        if !grid.is_empty_at(row, col) {
            continue;
        }
        let Some(&letter) = letters.choose(rng) else {
            return filled;
        };
        grid.set(row, col, letter);
        filled += 1;
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fills_every_empty_cell() {
        let mut grid = Grid::new(5);
        grid.set(2, 2, '*');
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(fill_gaps(&mut grid, &Alphabet::English, &mut rng), 24);
        assert!(grid.is_full());
        assert_eq!(grid.get(2, 2), Some('*'));
    }

    #[test]
    fn test_fill_uses_only_alphabet_letters() {
        let mut grid = Grid::new(8);
        let mut rng = StdRng::seed_from_u64(11);
        fill_gaps(&mut grid, &Alphabet::French, &mut rng);
        for (r, c) in grid.coordinates() {
            let letter = grid.get(r, c).unwrap();
            assert!(Alphabet::French.contains(letter), "unexpected letter {letter}");
            assert!(!letter.is_lowercase());
        }
    }

    #[test]
    fn test_single_letter_alphabet() {
        let mut grid = Grid::new(3);
        let mut rng = StdRng::seed_from_u64(0);
        fill_gaps(&mut grid, &Alphabet::from_letters("z"), &mut rng);
        assert!(grid.to_strings().iter().all(|row| row == "ZZZ"));
    }

    #[test]
    fn test_empty_alphabet_fills_nothing() {
        let mut grid = Grid::new(2);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(fill_gaps(&mut grid, &Alphabet::Custom(Vec::new()), &mut rng), 0);
        assert_eq!(grid.empty_count(), 4);
    }

    #[test]
    fn test_full_grid_is_unchanged() {
        let mut grid = Grid::new(2);
        for (r, c) in grid.coordinates().collect::<Vec<_>>() {
            grid.set(r, c, 'Q');
        }
        let before = grid.clone();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(fill_gaps(&mut grid, &Alphabet::English, &mut rng), 0);
        assert_eq!(grid, before);
    }
}
