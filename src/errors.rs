//! Error types for validating generator input, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W004) for documentation lookup:
//!
//! - W001: `InvalidSize` (Grid size is zero or too large)
//! - W002: `EmptyWordList` (No words given)
//! - W003: `EmptyWord` (A word has no letters)
//! - W004: `EmptyAlphabet` (No letters to fill the grid with)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::InputError;
//!
//! fn check_size(size: usize) -> Result<(), Box<InputError>> {
//!     if size == 0 {
//!         return Err(Box::new(InputError::InvalidSize { size }));
//!     }
//!     Ok(())
//! }
//!
//! match check_size(0) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use crate::grid::MAX_GRID_SIZE;

/// Something about the caller's input makes generation pointless to attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid grid size: {size} (must be between 1 and {max})", max = MAX_GRID_SIZE)]
    InvalidSize { size: usize },

    #[error("Empty word list")]
    EmptyWordList,

    #[error("Word #{index} has no letters")]
    EmptyWord { index: usize },

    #[error("Alphabet has no letters")]
    EmptyAlphabet,
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::InvalidSize { .. } => "W001",
            InputError::EmptyWordList => "W002",
            InputError::EmptyWord { .. } => "W003",
            InputError::EmptyAlphabet => "W004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::InvalidSize { .. } => "Grid size is zero or too large",
            InputError::EmptyWordList => "No words given",
            InputError::EmptyWord { .. } => "A word has no letters",
            InputError::EmptyAlphabet => "No letters to fill the grid with",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::InvalidSize { .. } => "The grid is N×N and N must be between 1 and 1024. No search is attempted.",
            InputError::EmptyWordList => "A puzzle needs at least one word to hide. No search is attempted.",
            InputError::EmptyWord { .. } => "Words are uppercased and stripped of whitespace before placement; this word had nothing left. Indices count from 0.",
            InputError::EmptyAlphabet => "Cells not covered by a word are filled with letters from the alphabet, so it must contain at least one letter.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::InvalidSize { .. } => Some("Use a size at least as long as the longest word, e.g. '--size 10'"),
            InputError::EmptyWordList => Some("Pass words as arguments or with '--words-file', e.g. 'wordsearch cat dog'"),
            InputError::EmptyWord { .. } => Some("Remove blank entries from the word list"),
            InputError::EmptyAlphabet => Some("Use 'english', 'french', or 'custom:<letters>' with at least one letter"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<InputError> {
        vec![
            InputError::InvalidSize { size: 0 },
            InputError::EmptyWordList,
            InputError::EmptyWord { index: 3 },
            InputError::EmptyAlphabet,
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = InputError::EmptyWordList;
        assert_eq!(err.code(), "W002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("W002"));
        assert!(detailed.contains("wordsearch cat dog"));
    }

    /// Test that all `InputError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
        assert_eq!(codes.len(), 4);
    }

    /// Test that all error codes follow the format W0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (W0XX)", code);
            assert!(code.starts_with("W0"), "Error code '{}' should start with 'W0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_help_adds_information() {
        for err in all_variants() {
            let help = err.help().expect("every input error has help text");
            assert!(help.len() > 10, "Help text for {:?} should be substantial", err);
            assert_ne!(help, err.to_string());
        }
    }

    #[test]
    fn test_messages_include_values() {
        assert!(InputError::InvalidSize { size: 0 }.to_string().contains('0'));
        assert!(InputError::EmptyWord { index: 3 }.to_string().contains("#3"));
    }

    #[test]
    fn test_invalid_size_names_the_limit() {
        let err = InputError::InvalidSize { size: MAX_GRID_SIZE + 1 };
        assert!(err.to_string().contains(&MAX_GRID_SIZE.to_string()));
        assert!(err.details().contains(&MAX_GRID_SIZE.to_string()));
    }
}
