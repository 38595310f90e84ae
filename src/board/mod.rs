//! Board model and setup.
//!
//! - `Board`/`Cell`: the grid, the single mutable source of truth
//! - `BoardDelta`: changes an accepted move makes
//! - `setup`: seeded initial layout

pub mod grid;
pub mod delta;
pub mod setup;

pub use grid::{Board, BoardView, Cell};
pub use delta::{BoardDelta, CellChange};
pub use setup::SetupError;
