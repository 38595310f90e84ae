//! Move requests: an origin and a destination coordinate.
//!
//! Coordinates are signed so that any request an input layer can produce,
//! negative or past the edge, reaches the rules and gets a proper rejection.

use serde::{Deserialize, Serialize};

/// A board coordinate, `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance to another coordinate.
    #[must_use]
    pub fn distance(self, other: Coord) -> u32 {
        let dr = (i64::from(self.row) - i64::from(other.row)).unsigned_abs();
        let dc = (i64::from(self.col) - i64::from(other.col)).unsigned_abs();
        dr.max(dc).min(u64::from(u32::MAX)) as u32
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single move request from the active side.
///
/// ```
/// use tactego::core::{Coord, Move};
///
/// let mv = Move::new(Coord::new(0, 0), Coord::new(1, 1));
/// assert_eq!(mv.to_string(), "(0, 0) -> (1, 1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
