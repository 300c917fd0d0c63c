//! `word_list` — loading the words to hide from text
//!
//! Words come either from an in-memory string (works everywhere, including
//! WebAssembly where there is no filesystem) or, on native builds, from a file
//! path.
//!
//! The format is one word per line:
//! - Surrounding whitespace is trimmed; blank lines are skipped.
//! - Lines starting with `#` are comments.
//! - Duplicates are dropped case-insensitively, keeping the first spelling.
//! - Input order is otherwise preserved, since the generator places words in
//!   the order given.

use std::collections::HashSet;

/// Words read from a list, in file order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Example: `["Lion", "Tiger", "Snow leopard"]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut seen: HashSet<String> = HashSet::new();
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter(|line| seen.insert(line.to_uppercase()))
            .map(str::to_string)
            .collect();

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Append words that are not already in the list (case-insensitive).
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self.words.iter().map(|w| w.to_uppercase()).collect();
        for word in words {
            let word = word.into();
            let trimmed = word.trim();
            if !trimmed.is_empty() && seen.insert(trimmed.to_uppercase()) {
                self.words.push(trimmed.to_string());
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let word_list = WordList::parse_from_str("cat\ndog\nbird");
        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_keeps_input_order() {
        let word_list = WordList::parse_from_str("zebra\napple\nmango");
        assert_eq!(word_list.words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_deduplicates_case_insensitively() {
        let word_list = WordList::parse_from_str("Cat\ndog\ncat\nCAT");
        assert_eq!(word_list.words, vec!["Cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_comments() {
        let word_list = WordList::parse_from_str("# animals\ncat\n\n   \ndog\n#done\n");
        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let word_list = WordList::parse_from_str("  cat  \n\tice cream \n");
        assert_eq!(word_list.words, vec!["cat", "ice cream"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
    }

    #[test]
    fn test_extend_skips_duplicates_and_blanks() {
        let mut word_list = WordList::parse_from_str("cat\ndog");
        word_list.extend(["DOG", " ", "emu", "emu"]);
        assert_eq!(word_list.words, vec!["cat", "dog", "emu"]);
        assert_eq!(word_list.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordList::load_from_path("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
