//! Initial board layout.
//!
//! Each side's rank order is shuffled from its own seeded stream, then the
//! pieces are laid down rank by rank: Red row-major from the top-left
//! corner, Blue mirrored from the bottom-right. Each side gets at most half
//! the board, rounded down, so the two fills never meet.

use thiserror::Error;
use tracing::debug;

use super::grid::{Board, Cell};
use crate::core::{GameRng, Side};
use crate::pieces::{Piece, PieceTable, Rank};

/// Setup failures. All abort the game before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("board dimensions {length}x{width} leave no room for pieces")]
    EmptyBoard { length: usize, width: usize },

    #[error("board dimensions {length}x{width} are too large")]
    DimensionsTooLarge { length: usize, width: usize },

    #[error("at most one flag per side is allowed, table asks for {count}")]
    TooManyFlags { count: u32 },

    #[error("board too small: each side needs {required} cells but only {capacity} are available")]
    BoardTooSmall { required: usize, capacity: usize },
}

/// Build the starting board for a piece table.
///
/// ```
/// use tactego::board::setup;
/// use tactego::core::{Coord, GameRng, Side};
/// use tactego::pieces::PieceTable;
///
/// let table = PieceTable::parse("F 1\n4 2").unwrap();
/// let board = setup::generate(&table, 4, 3, &GameRng::new(1)).unwrap();
///
/// assert_eq!(board.piece_at(Coord::new(0, 0)).map(|p| p.owner), Some(Side::Red));
/// assert_eq!(board.piece_at(Coord::new(3, 2)).map(|p| p.owner), Some(Side::Blue));
/// assert_eq!(board.pieces().count(), 6);
/// ```
pub fn generate(
    table: &PieceTable,
    length: usize,
    width: usize,
    rng: &GameRng,
) -> Result<Board, SetupError> {
    if length == 0 || width == 0 {
        return Err(SetupError::EmptyBoard { length, width });
    }

    // Every row and column index must be addressable by a `Coord`.
    let cell_count = length
        .checked_mul(width)
        .filter(|_| i32::try_from(length).is_ok() && i32::try_from(width).is_ok())
        .ok_or(SetupError::DimensionsTooLarge { length, width })?;
    let max_area = cell_count / 2;

    let flags = table.quantity(Rank::Flag);
    if flags > 1 {
        return Err(SetupError::TooManyFlags { count: flags });
    }

    let red_order = shuffled_ranks(table, &mut rng.for_context("red"));
    let blue_order = shuffled_ranks(table, &mut rng.for_context("blue"));

    let required = table.total_per_side();
    if required > max_area {
        return Err(SetupError::BoardTooSmall {
            required,
            capacity: max_area,
        });
    }

    let mut board = Board::empty(length, width);
    for (n, rank) in expand(table, &red_order).enumerate() {
        let at = board.coord_of(n);
        board.set(at, Cell::Occupied(Piece::new(Side::Red, rank)));
    }
    for (n, rank) in expand(table, &blue_order).enumerate() {
        let at = board.coord_of(cell_count - 1 - n);
        board.set(at, Cell::Occupied(Piece::new(Side::Blue, rank)));
    }

    debug!(
        length,
        width,
        pieces_per_side = required,
        seed = rng.seed(),
        "Board set up"
    );

    Ok(board)
}

fn shuffled_ranks(table: &PieceTable, rng: &mut GameRng) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = table.entries().iter().map(|&(rank, _)| rank).collect();
    rng.shuffle(&mut ranks);
    ranks
}

/// Each rank repeated by its quantity, in the given rank order.
fn expand<'a>(table: &'a PieceTable, order: &'a [Rank]) -> impl Iterator<Item = Rank> + 'a {
    order
        .iter()
        .flat_map(move |&rank| std::iter::repeat(rank).take(table.quantity(rank) as usize))
}
