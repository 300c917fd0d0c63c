use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Character-set constants
pub(crate) const ENGLISH_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub(crate) const FRENCH_LETTERS: &str = "aàbcçdeèéfghiîjklmnoôpqrstuvwxyz";

static ENGLISH_SET: LazyLock<HashSet<char>> = LazyLock::new(|| uppercase_letters(ENGLISH_LETTERS).collect());
static FRENCH_SET: LazyLock<HashSet<char>> = LazyLock::new(|| uppercase_letters(FRENCH_LETTERS).collect());

fn uppercase_letters(letters: &str) -> impl Iterator<Item = char> + '_ {
    letters.chars().flat_map(char::to_uppercase)
}

/// The letters used to fill the cells that no word occupies.
///
/// Letters are stored uppercase, since that is how the grid is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// The 26 letters a-z.
    #[default]
    English,
    /// The English letters plus `à ç è é î ô`.
    French,
    /// A caller-supplied letter list (duplicates are kept, which weights the draw).
    Custom(Vec<char>),
}

impl Alphabet {
    /// Build a custom alphabet from a string of letters, uppercasing each one.
    /// Whitespace is ignored.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        Alphabet::Custom(
            letters
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_uppercase)
                .collect(),
        )
    }

    /// The fill letters, uppercase, in their canonical order.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        match self {
            Alphabet::English => uppercase_letters(ENGLISH_LETTERS).collect(),
            Alphabet::French => uppercase_letters(FRENCH_LETTERS).collect(),
            Alphabet::Custom(letters) => letters.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Alphabet::English => ENGLISH_LETTERS.chars().count(),
            Alphabet::French => FRENCH_LETTERS.chars().count(),
            Alphabet::Custom(letters) => letters.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `c` (compared uppercase) belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c.to_uppercase().all(|u| match self {
            Alphabet::English => ENGLISH_SET.contains(&u),
            Alphabet::French => FRENCH_SET.contains(&u),
            Alphabet::Custom(letters) => letters.contains(&u),
        })
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::English => write!(f, "english"),
            Alphabet::French => write!(f, "french"),
            Alphabet::Custom(letters) => write!(f, "custom({})", letters.iter().collect::<String>()),
        }
    }
}

impl FromStr for Alphabet {
    type Err = String;

    /// Accepts `english`/`en`, `french`/`fr` (case-insensitive), or
    /// `custom:<letters>` for an explicit letter list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(letters) = trimmed.strip_prefix("custom:") {
            return Ok(Alphabet::from_letters(letters));
        }
        match trimmed.to_lowercase().as_str() {
            "english" | "en" => Ok(Alphabet::English),
            "french" | "fr" => Ok(Alphabet::French),
            other => Err(format!(
                "unknown alphabet '{other}' (expected 'english', 'french' or 'custom:<letters>')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_letters() {
        let letters = Alphabet::English.letters();
        assert_eq!(letters.len(), 26);
        assert_eq!(letters.first(), Some(&'A'));
        assert_eq!(letters.last(), Some(&'Z'));
        assert!(letters.iter().all(char::is_ascii_uppercase));
    }

    #[test]
    fn test_french_letters_include_accents() {
        let letters = Alphabet::French.letters();
        assert_eq!(letters.len(), 32);
        for c in ['À', 'Ç', 'È', 'É', 'Î', 'Ô'] {
            assert!(letters.contains(&c), "French alphabet should contain '{c}'");
        }
    }

    #[test]
    fn test_len_matches_letters() {
        for alphabet in [Alphabet::English, Alphabet::French, Alphabet::from_letters("xyz")] {
            assert_eq!(alphabet.len(), alphabet.letters().len());
        }
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        assert!(Alphabet::English.contains('q'));
        assert!(Alphabet::English.contains('Q'));
        assert!(!Alphabet::English.contains('é'));
        assert!(Alphabet::French.contains('é'));
        assert!(Alphabet::French.contains('É'));
        assert!(!Alphabet::French.contains('ü'));
    }

    #[test]
    fn test_from_letters_uppercases_and_skips_whitespace() {
        let alphabet = Alphabet::from_letters("a b\tc");
        assert_eq!(alphabet.letters(), vec!['A', 'B', 'C']);
        assert!(Alphabet::from_letters("  ").is_empty());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("english".parse::<Alphabet>(), Ok(Alphabet::English));
        assert_eq!("FR".parse::<Alphabet>(), Ok(Alphabet::French));
        assert_eq!("custom:abc".parse::<Alphabet>(), Ok(Alphabet::Custom(vec!['A', 'B', 'C'])));
        assert!("klingon".parse::<Alphabet>().is_err());
    }

    #[test]
    fn test_display_round_trips_named_alphabets() {
        for alphabet in [Alphabet::English, Alphabet::French] {
            assert_eq!(alphabet.to_string().parse::<Alphabet>(), Ok(alphabet));
        }
    }
}
