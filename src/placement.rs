//! The placement engine: a randomized backtracking search that gives every word
//! a start cell and a direction so that all words fit in the grid at once.
//!
//! # Search order
//!
//! Words are placed in input order, one recursion level per word. For each
//! word the engine draws a random `(row, col)` offset and scans every cell in
//! row-major order from there, wrapping around the edges. For each cell it
//! draws a random offset into the direction list and tries every direction
//! from there, again wrapping. The randomness only picks *where the scan
//! starts*, so every `(cell, direction)` pair is still visited exactly once per
//! level.
//!
//! # Backtracking
//!
//! A candidate fits when every letter lands inside the grid on a cell that is
//! empty or already holds the same letter (so words may cross). When a
//! candidate fits, its letters are written and the engine recurses. If the
//! recursion fails, exactly the cells this candidate wrote are cleared again
//! (an undo log, never a copy of the grid) and the next candidate is tried.
//!
//! # Budget
//!
//! The search space is exponential in the number of words. Every tentative
//! placement is charged to a [`SearchBudget`]; when it runs out, the search
//! stops with [`PlacementFailure::BudgetExhausted`] rather than running on.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wordsearch::direction::DirectionSet;
//! use wordsearch::grid::Grid;
//! use wordsearch::placement::{PlacementEngine, SearchBudget};
//!
//! let words: Vec<Vec<char>> = vec!["CAT".chars().collect()];
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut grid = Grid::new(3);
//! let mut engine = PlacementEngine::new(&words, DirectionSet::Classic, SearchBudget::unlimited(), &mut rng);
//! let placements = engine.place(&mut grid)?;
//! assert_eq!(placements.len(), 1);
//! # Ok::<(), wordsearch::placement::PlacementFailure>(())
//! ```

use std::time::Duration;

use instant::Instant;
use log::{debug, trace};
use rand::Rng;

use crate::direction::{Direction, DirectionSet};
use crate::grid::Grid;

/// Where one word ended up: start cell, direction, and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the word in the input list.
    pub word_index: usize,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Number of letters (and cells) in the word.
    pub len: usize,
}

impl Placement {
    /// The cells this placement covers, first letter first.
    ///
    /// Cells that would fall above or left of the grid are skipped; the engine
    /// never produces such placements.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (self.row as isize, self.col as isize);
        (0..self.len).filter_map(move |k| {
            let (r, c) = self.direction.offset(row, col, k as isize);
            Some((usize::try_from(r).ok()?, usize::try_from(c).ok()?))
        })
    }
}

/// Why the engine could not place every word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementFailure {
    /// Every `(cell, direction)` combination was tried at every level.
    #[error("every placement was tried without fitting all words")]
    Exhausted,

    /// The step or time budget ran out before the search finished.
    #[error("search budget exhausted after {steps} steps")]
    BudgetExhausted { steps: u64 },
}

/// Caps the work one search may do.
///
/// One step is one tentative placement. Either limit may be absent.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    start: Instant,
    max_steps: Option<u64>,
    time_limit: Option<Duration>,
    steps: u64,
}

impl SearchBudget {
    /// Create a budget; the clock starts now.
    #[must_use]
    pub fn new(max_steps: Option<u64>, time_limit: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            max_steps,
            time_limit,
            steps: 0,
        }
    }

    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    /// Steps charged so far.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns true once either limit has been reached.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.max_steps.is_some_and(|max| self.steps >= max)
            || self.time_limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }

    /// Charge one step, failing if the budget was already used up.
    fn charge(&mut self) -> Result<(), PlacementFailure> {
        if self.expired() {
            return Err(PlacementFailure::BudgetExhausted { steps: self.steps });
        }
        self.steps += 1;
        Ok(())
    }
}

/// Would `word` fit starting at `(row, col)` going `direction`?
fn fits(grid: &Grid, word: &[char], row: usize, col: usize, direction: Direction) -> bool {
    let (row, col) = (row as isize, col as isize);
    word.iter().enumerate().all(|(k, &letter)| {
        let (r, c) = direction.offset(row, col, k as isize);
        grid.within_bounds(r, c)
            && grid
                .get(r.unsigned_abs(), c.unsigned_abs())
                .is_none_or(|existing| existing == letter)
    })
}

/// Write `word` into the grid and return the cells that were empty before,
/// which are exactly the cells to clear when undoing this placement.
///
/// The caller must have checked [`fits`] first.
fn write_word(grid: &mut Grid, word: &[char], row: usize, col: usize, direction: Direction) -> Vec<(usize, usize)> {
    let mut written = Vec::with_capacity(word.len());
    let (row, col) = (row as isize, col as isize);
    for (k, &letter) in word.iter().enumerate() {
        let (r, c) = direction.offset(row, col, k as isize);
        let (r, c) = (r.unsigned_abs(), c.unsigned_abs());
        if grid.is_empty_at(r, c) {
            grid.set(r, c, letter);
            written.push((r, c));
        }
        debug_assert_eq!(grid.get(r, c), Some(letter), "write_word called on a candidate that does not fit");
    }
    written
}

/// Tries to place `word` at a candidate, leaving the grid untouched if it
/// does not fit. Returns the undo log on success.
pub fn try_place(grid: &mut Grid, word: &[char], row: usize, col: usize, direction: Direction) -> Option<Vec<(usize, usize)>> {
    if fits(grid, word, row, col, direction) {
        Some(write_word(grid, word, row, col, direction))
    } else {
        None
    }
}

/// Randomized backtracking search over `(cell, direction)` candidates.
pub struct PlacementEngine<'a, R: Rng> {
    words: &'a [Vec<char>],
    directions: &'static [Direction],
    budget: SearchBudget,
    rng: &'a mut R,
    placements: Vec<Placement>,
    backtracks: u64,
}

impl<'a, R: Rng> PlacementEngine<'a, R> {
    /// `words` must already be normalized (uppercase, no whitespace) and
    /// non-empty; the generator takes care of that.
    pub fn new(words: &'a [Vec<char>], directions: DirectionSet, budget: SearchBudget, rng: &'a mut R) -> Self {
        Self {
            words,
            directions: directions.directions(),
            budget,
            rng,
            placements: Vec::with_capacity(words.len()),
            backtracks: 0,
        }
    }

    /// Tentative placements made so far.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.budget.steps()
    }

    /// How many committed placements were undone because a later word failed.
    #[must_use]
    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Place every word in `grid`, returning the placements in word order.
    ///
    /// On success the grid holds every word's letters; empty cells remain
    /// empty for the gap filler.
    ///
    /// # Errors
    /// - [`PlacementFailure::Exhausted`] if no combination fits.
    /// - [`PlacementFailure::BudgetExhausted`] if the budget ran out first.
    ///
    /// After an error the grid contents are unspecified and should be dropped.
    pub fn place(&mut self, grid: &mut Grid) -> Result<Vec<Placement>, PlacementFailure> {
        self.placements.clear();

        // A word longer than the grid side fits in no direction, so the full
        // search would only rediscover that at every level above it.
        if let Some((i, word)) = self.words.iter().enumerate().find(|(_, w)| w.len() > grid.size()) {
            debug!(
                "word #{i} ({} letters) is longer than the grid side ({}); nothing to search",
                word.len(),
                grid.size()
            );
            return Err(PlacementFailure::Exhausted);
        }

        if self.place_from(grid, 0)? {
            debug_assert_eq!(self.placements.len(), self.words.len());
            debug!(
                "placed {} words in {} steps ({} backtracks)",
                self.words.len(),
                self.budget.steps(),
                self.backtracks
            );
            Ok(std::mem::take(&mut self.placements))
        } else {
            debug!("search exhausted after {} steps", self.budget.steps());
            Err(PlacementFailure::Exhausted)
        }
    }

    /// Place `words[word_index..]`. `Ok(false)` means no candidate at this
    /// level leads to a full placement.
    fn place_from(&mut self, grid: &mut Grid, word_index: usize) -> Result<bool, PlacementFailure> {
        let words = self.words;
        let Some(word) = words.get(word_index) else {
            // Base case: every word has a place.
            return Ok(true);
        };

        let size = grid.size();
        let num_directions = self.directions.len();
        let row_offset = self.rng.gen_range(0..size);
        let col_offset = self.rng.gen_range(0..size);

        for i in 0..size {
            let row = (row_offset + i) % size;
            for j in 0..size {
                let col = (col_offset + j) % size;
                let dir_offset = self.rng.gen_range(0..num_directions);

                for k in 0..num_directions {
                    let direction = self.directions[(dir_offset + k) % num_directions];
                    self.budget.charge()?;

                    let Some(written) = try_place(grid, word, row, col, direction) else {
                        continue;
                    };

                    self.placements.push(Placement {
                        word_index,
                        row,
                        col,
                        direction,
                        len: word.len(),
                    });

                    if self.place_from(grid, word_index + 1)? {
                        return Ok(true);
                    }

                    // Backtrack: undo only what this candidate wrote.
                    self.placements.pop();
                    for (r, c) in written {
                        grid.clear(r, c);
                    }
                    self.backtracks += 1;
                    trace!("word #{word_index}: backtracking from ({row}, {col}) {direction}");
                }
            }
        }

        Ok(false)
    }
}
