// Triliteral root value type

use std::fmt;
use std::str::FromStr;

use crate::character::is_arabic_letter;
use crate::normalize::normalize;

/// Error raised when a string cannot be interpreted as a triliteral root.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootError {
    /// The input was empty (or became empty after normalization).
    #[error("root is empty after normalization")]
    Empty,

    /// The normalized input does not have exactly three letters.
    #[error("root must have exactly 3 letters, found {found}")]
    WrongLength { found: usize },

    /// A character in the root is not an Arabic letter.
    #[error("'{letter}' is not an Arabic letter")]
    NotArabic { letter: char },
}

/// A validated Arabic triliteral root: exactly three normalized letters.
///
/// Roots are immutable value keys. Equality and ordering are lexicographic
/// by code point over the normalized letters, so letter variants that
/// normalize to the same form compare equal. Construction goes through
/// [`Root::parse`], which normalizes first; a `Root` in hand is always
/// valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Root([char; 3]);

impl Root {
    /// Parse a root from raw text: normalize, then require exactly three
    /// Arabic letters.
    ///
    /// Leading and trailing whitespace is ignored. Diacritics are stripped
    /// by normalization, so a vocalized form like `كَتَبَ` parses to the
    /// skeleton `كتب`.
    pub fn parse(text: &str) -> Result<Self, RootError> {
        let normalized = normalize(text.trim());
        if normalized.is_empty() {
            return Err(RootError::Empty);
        }
        let chars: Vec<char> = normalized.chars().collect();
        if chars.len() != 3 {
            return Err(RootError::WrongLength { found: chars.len() });
        }
        for &c in &chars {
            if !is_arabic_letter(c) {
                return Err(RootError::NotArabic { letter: c });
            }
        }
        Ok(Root([chars[0], chars[1], chars[2]]))
    }

    /// The radical at the given 1-based position (1, 2 or 3).
    ///
    /// # Panics
    /// Panics if `position` is not 1, 2 or 3.
    pub fn radical(&self, position: usize) -> char {
        assert!((1..=3).contains(&position), "radical position must be 1..=3");
        self.0[position - 1]
    }

    /// The three radicals in order.
    pub fn radicals(&self) -> [char; 3] {
        self.0
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Root {
    type Err = RootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Root::parse(s)
    }
}
