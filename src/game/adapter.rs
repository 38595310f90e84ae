//! Seams to the outside world.
//!
//! The session never reads input or draws anything itself. A `MoveSource`
//! supplies move requests (and hears about rejections so it can re-prompt);
//! a `GameObserver` is told about accepted moves and the final result.

use std::collections::VecDeque;
use std::io;

use super::session::TurnOutcome;
use crate::board::Board;
use crate::core::{Move, Side};
use crate::rules::MoveError;

/// Supplies move requests for the active side.
pub trait MoveSource {
    /// Next request for `side`. `Ok(None)` means the input is exhausted.
    fn next_move(&mut self, side: Side, board: &Board) -> io::Result<Option<Move>>;

    /// The last request was rejected; the session will ask again.
    fn rejected(&mut self, _side: Side, _mv: Move, _error: &MoveError) {}
}

/// Receives game progress.
pub trait GameObserver {
    /// A move was accepted and applied to `board`.
    fn move_accepted(&mut self, _turn: &TurnOutcome, _board: &Board) {}

    /// The game ended. Called exactly once per session.
    fn game_over(&mut self, winner: Side, board: &Board);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn game_over(&mut self, _winner: Side, _board: &Board) {}
}

/// A fixed queue of moves, handed out regardless of side.
///
/// Rejections are collected so callers can inspect them afterwards.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Move>,
    rejections: Vec<(Side, Move, MoveError)>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    /// Moves not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Every rejection seen so far, in order.
    #[must_use]
    pub fn rejections(&self) -> &[(Side, Move, MoveError)] {
        &self.rejections
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _side: Side, _board: &Board) -> io::Result<Option<Move>> {
        Ok(self.moves.pop_front())
    }

    fn rejected(&mut self, side: Side, mv: Move, error: &MoveError) {
        self.rejections.push((side, mv, *error));
    }
}
