//! Move legality and combat.
//!
//! - `moves`: ordered legality checks producing a `BoardDelta`
//! - `combat`: rank comparison and the equal-rank policy

pub mod combat;
pub mod moves;

pub use combat::{Combat, CombatResult};
pub use moves::{apply_move, attempt_move, MoveError, MoveOutcome};
