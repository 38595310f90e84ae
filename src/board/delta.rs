//! Board deltas: the cell changes an accepted move produces.
//!
//! The rules never touch a board directly. They compute a `BoardDelta`
//! and the session applies it with [`Board::apply`](super::Board::apply).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::Cell;
use crate::core::Coord;

/// One cell's before/after contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub at: Coord,
    pub before: Cell,
    pub after: Cell,
}

/// Ordered set of cell changes. A move touches at most two cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDelta {
    changes: SmallVec<[CellChange; 2]>,
}

impl BoardDelta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change. Changes are applied in the order pushed.
    pub fn push(&mut self, at: Coord, before: Cell, after: Cell) {
        self.changes.push(CellChange { at, before, after });
    }

    #[must_use]
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// Contents of `at` after the delta, if the delta touches it.
    #[must_use]
    pub fn after(&self, at: Coord) -> Option<Cell> {
        self.changes.iter().rev().find(|c| c.at == at).map(|c| c.after)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::Side;
    use crate::pieces::{Piece, Rank};

    #[test]
    fn test_apply_delta() {
        let scout = Piece::new(Side::Red, Rank::Numeric(2));
        let from = Coord::new(0, 0);
        let to = Coord::new(0, 1);
        let mut board = Board::empty(1, 2).with_piece(from, scout);

        let mut delta = BoardDelta::new();
        delta.push(from, Cell::Occupied(scout), Cell::Empty);
        delta.push(to, Cell::Empty, Cell::Occupied(scout));
        board.apply(&delta);

        assert_eq!(board.piece_at(from), None);
        assert_eq!(board.piece_at(to), Some(scout));
        assert_eq!(delta.after(to), Some(Cell::Occupied(scout)));
        assert_eq!(delta.after(Coord::new(5, 5)), None);
    }

    #[test]
    fn test_empty_delta_changes_nothing() {
        let mut board = Board::empty(2, 2);
        let before = board.clone();
        board.apply(&BoardDelta::new());
        assert_eq!(board, before);
        assert!(BoardDelta::new().is_empty());
    }
}
