//! Player identification.
//!
//! Only ruler pieces carry a player. In board notation the player is a
//! single digit, so ids stay within `0..=9` there, but the type itself
//! accepts any `u8`.

use serde::{Deserialize, Serialize};

/// Owner of a ruler piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Parse the single-digit player number used in board notation.
    #[must_use]
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Single-digit notation form, if the id fits in one digit.
    #[must_use]
    pub fn to_digit(self) -> Option<char> {
        char::from_digit(u32::from(self.0), 10)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new(2);
        assert_eq!(p.raw(), 2);
        assert_eq!(format!("{}", p), "Player 2");
    }

    #[test]
    fn test_digit_roundtrip() {
        assert_eq!(PlayerId::from_digit('3'), Some(PlayerId::new(3)));
        assert_eq!(PlayerId::from_digit('x'), None);
        assert_eq!(PlayerId::new(3).to_digit(), Some('3'));
        assert_eq!(PlayerId::new(12).to_digit(), None);
    }
}
