//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `InputError` and `GenerateError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsearch::errors::InputError;
use wordsearch::generator::GenerateError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `InputError` variants for documentation
fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::InvalidSize { size: 0 },
        InputError::EmptyWordList,
        InputError::EmptyWord { index: 2 },
        InputError::EmptyAlphabet,
    ]
}

/// Helper to create all `GenerateError` variants for documentation
fn all_generate_error_variants() -> Vec<GenerateError> {
    vec![
        GenerateError::from(InputError::EmptyWordList),
        GenerateError::PlacementExhausted { size: 3 },
        GenerateError::BudgetExhausted { size: 6, steps: 2_000_000 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Generator Errors (G001–G003)](#generator-errors)");
    println!("- [Input Errors (W001–W004)](#input-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    println!("## Generator Errors\n");
    println!("Top-level errors from the generator. These wrap input errors or report that the words could not be placed.\n");
    generate_error_docs!(all_generate_error_variants());

    println!("## Input Errors\n");
    println!("Errors found while checking the word list, grid size, and alphabet, before any search runs.\n");
    generate_error_docs!(all_input_error_variants());

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: could not fit all words in a 3 × 3 grid (G002)");
    println!("Try a bigger grid, e.g. one larger than both the longest word and the number of words");
    println!("```\n");
    println!("1. Note the error code (e.g., `G002`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_code_documented_once() {
        let mut codes = HashSet::new();
        for e in all_input_error_variants() {
            assert!(codes.insert(e.code()), "duplicate {}", e.code());
        }
        for e in all_generate_error_variants() {
            assert!(codes.insert(e.code()), "duplicate {}", e.code());
        }
        assert_eq!(codes.len(), 7);
    }
}
