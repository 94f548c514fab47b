use std::fmt;

use serde::{Deserialize, Serialize};

/// A single uppercase letter (`A`–`Z`) held by a board cell or block cell.
///
/// Stored as its ASCII byte. Serializes as a one-character string.
///
/// # Example
///
/// ```
/// use wordgrid_engine::Letter;
///
/// let a = Letter::new('A').unwrap();
/// assert_eq!(a.as_char(), 'A');
/// assert_eq!(Letter::new('a'), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct Letter(u8);

/// A board or block cell: either empty or holding exactly one letter.
pub type Cell = Option<Letter>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid letter {_0:?}: expected an uppercase ASCII letter")]
pub struct InvalidLetterError(#[error(not(source))] pub char);

impl Letter {
    /// Creates a letter from an uppercase ASCII character.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Self(c as u8))
        } else {
            None
        }
    }

    /// Creates a letter from an uppercase ASCII byte.
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii_uppercase() {
            Some(Self(b))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({})", self.as_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidLetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(InvalidLetterError(c))
    }
}

/// Character used for empty cells in ASCII fixtures and compact serialized forms.
pub const EMPTY_CELL_CHAR: char = '.';

pub(crate) fn cell_to_char(cell: Cell) -> char {
    cell.map_or(EMPTY_CELL_CHAR, Letter::as_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_accepts_only_uppercase_ascii() {
        for c in 'A'..='Z' {
            assert_eq!(Letter::new(c).map(Letter::as_char), Some(c));
        }
        assert_eq!(Letter::new('a'), None);
        assert_eq!(Letter::new('1'), None);
        assert_eq!(Letter::new('É'), None);
        assert_eq!(Letter::from_byte(b'Q').map(Letter::as_char), Some('Q'));
        assert_eq!(Letter::from_byte(b'q'), None);
    }

    #[test]
    fn test_letter_serialization() {
        let letter = Letter::new('K').unwrap();
        let serialized = serde_json::to_string(&letter).unwrap();
        assert_eq!(serialized, "\"K\"");

        let deserialized: Letter = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, letter);

        assert!(serde_json::from_str::<Letter>("\"k\"").is_err());
        assert!(serde_json::from_str::<Letter>("\"7\"").is_err());
    }

    #[test]
    fn test_cell_to_char() {
        assert_eq!(cell_to_char(None), '.');
        assert_eq!(cell_to_char(Letter::new('Z')), 'Z');
    }
}
