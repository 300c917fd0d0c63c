//! The puzzle generator: validates the input, runs the placement engine, fills
//! the gaps, and hands back a finished [`Puzzle`].
//!
//! # Error Handling
//!
//! The generator uses [`GenerateError`] with three variants:
//!
//! - G001: `InvalidInput` (Input rejected before searching (wraps [`InputError`]))
//! - G002: `PlacementExhausted` (Every placement was tried and the words do not fit)
//! - G003: `BudgetExhausted` (The search hit its step or time limit)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//! No partially placed grid is ever returned.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordsearch::generator::{generate, GeneratorConfig, Reveal};
//!
//! let config = GeneratorConfig::new(8).with_seed(2020);
//! let puzzle = generate(&["cat", "dog", "emu"], &config)?;
//!
//! println!("{}", puzzle.render(Reveal::Hidden));
//! assert!(puzzle.grid().is_full());
//! # Ok::<(), wordsearch::generator::GenerateError>(())
//! ```
//!
//! ## Handling Failure
//!
//! ```
//! use wordsearch::generator::{generate, GenerateError, GeneratorConfig};
//!
//! match generate(&["abcdefghij"], &GeneratorConfig::new(3)) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => {
//!         assert!(matches!(e, GenerateError::PlacementExhausted { size: 3 }));
//!         eprintln!("{}", e.display_detailed());
//!     }
//! }
//! ```

use std::fmt::Write;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::alphabet::Alphabet;
use crate::direction::DirectionSet;
use crate::errors::InputError;
use crate::fill::fill_gaps;
use crate::grid::{Grid, EMPTY_CELL_CHAR, MAX_GRID_SIZE};
use crate::locations::LetterLocations;
use crate::placement::{Placement, PlacementEngine, PlacementFailure, SearchBudget};

/// Default cap on tentative placements per call.
pub const DEFAULT_MAX_STEPS: u64 = 2_000_000;

/// Unified error type for the generator.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The input was rejected before any search ran.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Box<InputError>),

    /// The search tried every candidate and could not fit every word.
    #[error("could not fit all words in a {size} × {size} grid")]
    PlacementExhausted { size: usize },

    /// The search gave up once its step or time budget ran out.
    #[error("gave up fitting words in a {size} × {size} grid after {steps} steps")]
    BudgetExhausted { size: usize, steps: u64 },
}

impl From<InputError> for GenerateError {
    fn from(e: InputError) -> Self {
        GenerateError::InvalidInput(Box::new(e))
    }
}

impl GenerateError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidInput(_) => "G001",
            GenerateError::PlacementExhausted { .. } => "G002",
            GenerateError::BudgetExhausted { .. } => "G003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GenerateError::InvalidInput(_) => "Input rejected before searching",
            GenerateError::PlacementExhausted { .. } => "Every placement was tried and the words do not fit",
            GenerateError::BudgetExhausted { .. } => "The search hit its step or time limit",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GenerateError::InvalidInput(_) => "The word list, size, or alphabet was rejected before placement started. This wraps an underlying InputError (see Input Errors section for specific error codes).",
            GenerateError::PlacementExhausted { .. } => "The backtracking search tried every start cell and direction for every word and found no layout that fits all words. A larger grid gives the search more room.",
            GenerateError::BudgetExhausted { .. } => "The search was stopped after the configured number of tentative placements (or the time limit) without finding a layout. A layout may still exist; a larger grid, a different seed, or a bigger budget may find it.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GenerateError::PlacementExhausted { .. } => Some("Try a bigger grid, e.g. one larger than both the longest word and the number of words"),
            GenerateError::BudgetExhausted { .. } => Some("Try a bigger grid, another seed, or a larger '--max-steps'"),
            GenerateError::InvalidInput(_) => None, // InputError has its own help
        }
    }

    /// The grid size that was attempted, for failures that got as far as searching.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            GenerateError::InvalidInput(_) => None,
            GenerateError::PlacementExhausted { size } | GenerateError::BudgetExhausted { size, .. } => Some(*size),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            GenerateError::InvalidInput(ie) => {
                // delegate to InputError's detailed display
                format!("{}\n  caused by: {}", self.code(), ie.display_detailed())
            }
            _ => crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Everything one generation call needs. Nothing is shared between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Letters used to fill cells no word covers.
    pub alphabet: Alphabet,
    pub directions: DirectionSet,
    /// Cap on tentative placements; `None` means unbounded.
    pub max_steps: Option<u64>,
    /// Wall-clock cap on the search; `None` means unbounded.
    pub time_limit: Option<Duration>,
    /// Seed for the random source; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            alphabet: Alphabet::English,
            directions: DirectionSet::Classic,
            max_steps: Some(DEFAULT_MAX_STEPS),
            time_limit: None,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// How [`Puzzle::render`] shows the answer cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Every letter, as a solver sees the puzzle.
    Hidden,
    /// Only the letters of placed words; filler cells become `.`.
    Revealed,
}

/// Counters from the placement search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub steps: u64,
    pub backtracks: u64,
}

/// A finished puzzle: every word placed, every cell filled.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    locations: LetterLocations,
    placements: Vec<Placement>,
    words: Vec<String>,
    stats: SearchStats,
}

impl Puzzle {
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Cells covered by some placed word.
    #[must_use]
    pub fn letter_locations(&self) -> &LetterLocations {
        &self.locations
    }

    /// One placement per word, in input order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The words as placed (uppercase, whitespace removed), in input order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn is_word_cell(&self, row: usize, col: usize) -> bool {
        self.locations.contains(row, col)
    }

    /// The grid as text, one row per line with letters separated by spaces.
    #[must_use]
    pub fn render(&self, reveal: Reveal) -> String {
        let mut out = String::with_capacity(self.size() * self.size() * 2);
        for (row, cells) in self.grid.rows().enumerate() {
            if row > 0 {
                out.push('\n');
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                let shown = match reveal {
                    Reveal::Revealed if !self.is_word_cell(row, col) => EMPTY_CELL_CHAR,
                    _ => cell.unwrap_or(EMPTY_CELL_CHAR),
                };
                out.push(shown);
            }
        }
        out
    }

    /// Human-readable list of where each word is, e.g. `CAT (1,1) down-right`.
    #[must_use]
    pub fn answer_key(&self) -> String {
        let mut out = String::new();
        for (word, p) in self.words.iter().zip(&self.placements) {
            // NB: writing to a String never fails
            let _ = writeln!(out, "{word} ({},{}) {}", p.row + 1, p.col + 1, p.direction);
        }
        out
    }
}

/// The grid size worth suggesting for `words`: one more than the larger of
/// the longest word and the number of words.
#[must_use]
pub fn recommended_size<S: AsRef<str>>(words: &[S]) -> usize {
    let longest = words
        .iter()
        .map(|w| normalize_word(w.as_ref()).len())
        .max()
        .unwrap_or(0);
    longest.max(words.len()) + 1
}

/// Uppercase a word and drop whitespace, one `char` per grid cell.
fn normalize_word(word: &str) -> Vec<char> {
    word.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Check the input and normalize the words, before any search.
fn validate<S: AsRef<str>>(words: &[S], config: &GeneratorConfig) -> Result<Vec<Vec<char>>, InputError> {
    if config.size < 1 || config.size > MAX_GRID_SIZE {
        return Err(InputError::InvalidSize { size: config.size });
    }
    if words.is_empty() {
        return Err(InputError::EmptyWordList);
    }
    if config.alphabet.is_empty() {
        return Err(InputError::EmptyAlphabet);
    }
    words
        .iter()
        .enumerate()
        .map(|(index, w)| {
            let normalized = normalize_word(w.as_ref());
            if normalized.is_empty() {
                Err(InputError::EmptyWord { index })
            } else {
                Ok(normalized)
            }
        })
        .collect()
}

/// Generate a puzzle, seeding the random source from `config.seed` (or the OS).
///
/// # Errors
/// See [`generate_with_rng`].
pub fn generate<S: AsRef<str>>(words: &[S], config: &GeneratorConfig) -> Result<Puzzle, GenerateError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with_rng(words, config, &mut rng)
}

/// Generate a puzzle drawing all randomness from `rng`. `config.seed` is ignored.
///
/// The same `rng` state and input always produce the same puzzle.
///
/// # Errors
/// - [`GenerateError::InvalidInput`] for a zero size, an empty word list, a
///   word with no letters, or an empty alphabet. No search is attempted.
/// - [`GenerateError::PlacementExhausted`] when no layout fits every word.
/// - [`GenerateError::BudgetExhausted`] when the step or time budget ran out.
pub fn generate_with_rng<S: AsRef<str>, R: Rng>(
    words: &[S],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Puzzle, GenerateError> {
    let normalized = validate(words, config)?;
    let size = config.size;

    info!("Generating a {size} × {size} puzzle with {} words", normalized.len());
    debug!(
        "alphabet={}, directions={:?}, max_steps={:?}, time_limit={:?}",
        config.alphabet, config.directions, config.max_steps, config.time_limit
    );

    let mut grid = Grid::try_new(size).ok_or(InputError::InvalidSize { size })?;
    let budget = SearchBudget::new(config.max_steps, config.time_limit);
    let mut engine = PlacementEngine::new(&normalized, config.directions, budget, rng);

    let placed = engine.place(&mut grid);
    let stats = SearchStats {
        steps: engine.steps(),
        backtracks: engine.backtracks(),
    };
    let placements = placed.map_err(|failure| {
        info!("Placement failed in a {size} × {size} grid: {failure}");
        match failure {
            PlacementFailure::Exhausted => GenerateError::PlacementExhausted { size },
            PlacementFailure::BudgetExhausted { steps } => GenerateError::BudgetExhausted { size, steps },
        }
    })?;

    let locations: LetterLocations = placements.iter().collect();
    let filled = fill_gaps(&mut grid, &config.alphabet, rng);
    debug!("filled {filled} gaps; {} cells belong to words", locations.len());

    // Postcondition: nothing unfilled escapes, and every answer cell is in bounds
    debug_assert!(grid.is_full(), "grid must be full after gap filling");
    debug_assert!(
        locations.iter().all(|(r, c)| r < size && c < size),
        "letter locations must be within the grid"
    );

    info!("Placed all words in {} steps ({} backtracks)", stats.steps, stats.backtracks);

    Ok(Puzzle {
        grid,
        locations,
        placements,
        words: normalized.into_iter().map(String::from_iter).collect(),
        stats,
    })
}
