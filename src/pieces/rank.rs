//! Ranks and pieces.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// A piece's rank.
///
/// Numeric ranks fight: the higher number wins. The Flag has no combat
/// value and never moves; losing it loses the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Flag,
    Numeric(u32),
}

impl Rank {
    /// Parse a rank label: `F` for the Flag, or a decimal number.
    ///
    /// ```
    /// use tactego::pieces::Rank;
    ///
    /// assert_eq!(Rank::parse("F"), Some(Rank::Flag));
    /// assert_eq!(Rank::parse("7"), Some(Rank::Numeric(7)));
    /// assert_eq!(Rank::parse("Spy"), None);
    /// ```
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        if label == "F" {
            return Some(Rank::Flag);
        }
        if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        label.parse().ok().map(Rank::Numeric)
    }

    #[must_use]
    pub const fn is_flag(self) -> bool {
        matches!(self, Rank::Flag)
    }

    /// Combat value, `None` for the Flag.
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        match self {
            Rank::Flag => None,
            Rank::Numeric(n) => Some(n),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Flag => write!(f, "F"),
            Rank::Numeric(n) => write!(f, "{}", n),
        }
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Side,
    pub rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn new(owner: Side, rank: Rank) -> Self {
        Self { owner, rank }
    }

    #[must_use]
    pub const fn is_flag(self) -> bool {
        self.rank.is_flag()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.owner.letter(), self.rank)
    }
}
