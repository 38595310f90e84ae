//! The board grid.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board for a
//! snapshot or a presenter is O(1) and shares structure with its source.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::delta::BoardDelta;
use crate::core::{Coord, Side, SideMap};
use crate::pieces::{Piece, Rank};

/// Contents of one square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}

/// A fixed `length × width` grid of cells.
///
/// ```
/// use tactego::board::Board;
/// use tactego::core::{Coord, Side};
/// use tactego::pieces::{Piece, Rank};
///
/// let board = Board::empty(2, 3)
///     .with_piece(Coord::new(0, 1), Piece::new(Side::Red, Rank::Flag));
///
/// assert_eq!(board.piece_at(Coord::new(0, 1)).map(|p| p.owner), Some(Side::Red));
/// assert!(board.piece_at(Coord::new(1, 1)).is_none());
/// assert!(!board.in_bounds(Coord::new(2, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    length: usize,
    width: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create a board with every cell empty.
    ///
    /// Dimensions are taken as given; [`setup::generate`](super::setup::generate)
    /// is the checked entry point for untrusted sizes.
    #[must_use]
    pub fn empty(length: usize, width: usize) -> Self {
        Self {
            length,
            width,
            cells: std::iter::repeat(Cell::Empty)
                .take(length.saturating_mul(width))
                .collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row-major index of a coordinate, `None` when off the board.
    #[must_use]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.length && col < self.width).then(|| row * self.width + col)
    }

    /// Coordinate of a row-major index.
    #[must_use]
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index / self.width) as i32, (index % self.width) as i32)
    }

    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    /// Cell at a coordinate, `None` when off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// Piece at a coordinate, `None` when empty or off the board.
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.get(coord).and_then(Cell::piece)
    }

    /// Replace a cell, returning what it held before.
    ///
    /// Returns `None` and leaves the board untouched when `coord` is off the
    /// board.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Option<Cell> {
        let i = self.index_of(coord)?;
        Some(self.cells.set(i, cell))
    }

    /// Builder form of [`set`](Self::set) for laying out positions.
    #[must_use]
    pub fn with_piece(mut self, coord: Coord, piece: Piece) -> Self {
        self.set(coord, Cell::Occupied(piece));
        self
    }

    /// Apply an accepted move's changes.
    pub fn apply(&mut self, delta: &BoardDelta) {
        for change in delta.changes() {
            self.set(change.at, change.after);
        }
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.coord_of(i), cell))
    }

    /// Iterate over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells()
            .filter_map(|(coord, cell)| cell.piece().map(|piece| (coord, piece)))
    }

    /// Pieces remaining per side.
    #[must_use]
    pub fn piece_counts(&self) -> SideMap<usize> {
        let mut counts = SideMap::default();
        for (_, piece) in self.pieces() {
            counts[piece.owner] += 1;
        }
        counts
    }

    /// Flags remaining per side.
    #[must_use]
    pub fn flag_counts(&self) -> SideMap<usize> {
        let mut counts = SideMap::default();
        for (_, piece) in self.pieces().filter(|(_, p)| p.is_flag()) {
            counts[piece.owner] += 1;
        }
        counts
    }

    /// Export for presenters.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            length: self.length,
            width: self.width,
            cells: self
                .cells
                .iter()
                .map(|cell| cell.piece().map(|p| (p.owner, p.rank)))
                .collect(),
        }
    }
}

/// Presenter-facing board snapshot: per cell, empty or `(owner, rank)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub length: usize,
    pub width: usize,
    /// Row-major.
    pub cells: Vec<Option<(Side, Rank)>>,
}

impl BoardView {
    /// Row `row` of the snapshot.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<(Side, Rank)>] {
        let start = (row * self.width).min(self.cells.len());
        let end = (start + self.width).min(self.cells.len());
        &self.cells[start..end]
    }
}
