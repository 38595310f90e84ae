//! Piece registry: ranks, pieces and the per-side piece-count table.
//!
//! - `Rank`: Flag or numeric combat value
//! - `Piece`: a rank owned by a side
//! - `PieceTable`: quantities parsed from `label quantity` records

pub mod rank;
pub mod table;

pub use rank::{Piece, Rank};
pub use table::{PieceTable, PieceTableError};
