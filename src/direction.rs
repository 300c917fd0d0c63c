//! Directions a word can run in.
//!
//! The classic set has six directions: right, down, and both senses of each
//! diagonal. Pure left and pure up are left out, so a word is never spelled
//! backwards along a row or a column. [`DirectionSet::All`] adds those two for
//! callers who want the full compass.

use std::fmt;

/// A placement direction as a `(row delta, col delta)` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpLeft,
    UpRight,
    DownLeft,
    Left,
    Up,
}

/// The six classic directions, in the order the search walks them.
pub const CLASSIC_DIRECTIONS: [Direction; 6] = [
    Direction::Right,
    Direction::Down,
    Direction::DownRight,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
];

/// All eight compass directions: the classic six followed by left and up.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::Right,
    Direction::Down,
    Direction::DownRight,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::Left,
    Direction::Up,
];

impl Direction {
    /// `(row delta, col delta)` for one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    /// The cell `steps` steps away from `(row, col)`; may be out of bounds.
    #[must_use]
    pub const fn offset(self, row: isize, col: isize, steps: isize) -> (isize, isize) {
        let (dr, dc) = self.delta();
        (row + dr * steps, col + dc * steps)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::DownRight => "down-right",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
            Direction::DownLeft => "down-left",
            Direction::Left => "left",
            Direction::Up => "up",
        };
        f.write_str(name)
    }
}

/// Which directions the placement engine may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionSet {
    /// The six classic directions.
    #[default]
    Classic,
    /// All eight compass directions.
    All,
}

impl DirectionSet {
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            DirectionSet::Classic => &CLASSIC_DIRECTIONS,
            DirectionSet::All => &ALL_DIRECTIONS,
        }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.directions().len()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.directions().is_empty()
    }

    #[must_use]
    pub fn contains(self, direction: Direction) -> bool {
        self.directions().contains(&direction)
    }
}
