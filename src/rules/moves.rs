//! Move validation and resolution.
//!
//! [`apply_move`] is pure: it checks a request against the board and, when
//! legal, returns the [`BoardDelta`] the move produces. Checks run in a
//! fixed order and the first failure is the rejection reason:
//!
//! 1. both coordinates on the board
//! 2. the origin holds one of the mover's pieces
//! 3. the destination is one step away in any of the 8 directions
//! 4. the moving piece is not the Flag
//! 5. the destination is empty (plain move), or
//! 6. holds an enemy piece (attack); a friendly piece rejects

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::combat::{self, Combat, CombatResult};
use crate::board::{Board, BoardDelta, Cell};
use crate::core::{Coord, Move, Side, TieBreak};

/// Why a move was rejected. Every variant is recoverable: the mover simply
/// tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("coordinates {0} are off the board")]
    OutOfBounds(Coord),

    #[error("you can only move your own piece")]
    NotYourPiece,

    #[error("a piece can only move one space in any direction")]
    TooFar,

    #[error("a piece has to move to a different square")]
    Stationary,

    #[error("the flag cannot move")]
    FlagImmobile,

    #[error("that square is occupied by your own piece")]
    FriendlyOccupied,

    #[error("the game is already over")]
    GameOver,
}

/// An accepted move: the cell changes plus the fight, if there was one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub delta: BoardDelta,
    pub combat: Option<Combat>,
}

/// Validate `mv` for `player` and compute its effect on `board`.
///
/// The board is never modified.
pub fn apply_move(
    board: &Board,
    mv: Move,
    player: Side,
    tie_break: TieBreak,
) -> Result<MoveOutcome, MoveError> {
    let Move { from, to } = mv;

    let origin = board.get(from).ok_or(MoveError::OutOfBounds(from))?;
    let target = board.get(to).ok_or(MoveError::OutOfBounds(to))?;

    let mover = match origin.piece() {
        Some(piece) if piece.owner == player => piece,
        _ => return Err(MoveError::NotYourPiece),
    };

    match from.distance(to) {
        0 => return Err(MoveError::Stationary),
        1 => {}
        _ => return Err(MoveError::TooFar),
    }

    if mover.is_flag() {
        return Err(MoveError::FlagImmobile);
    }

    let mut delta = BoardDelta::new();
    let defender = match target.piece() {
        None => {
            delta.push(from, origin, Cell::Empty);
            delta.push(to, target, origin);
            return Ok(MoveOutcome {
                delta,
                combat: None,
            });
        }
        Some(piece) if piece.owner == player => return Err(MoveError::FriendlyOccupied),
        Some(piece) => piece,
    };

    let combat = combat::resolve(mover, defender, tie_break);
    let destination = match combat.result {
        CombatResult::FlagCaptured | CombatResult::AttackerWon => origin,
        CombatResult::DefenderWon => target,
        CombatResult::BothDestroyed => Cell::Empty,
    };
    delta.push(from, origin, Cell::Empty);
    if destination != target {
        delta.push(to, target, destination);
    }

    Ok(MoveOutcome {
        delta,
        combat: Some(combat),
    })
}

/// Validate and, on acceptance, apply a move in place.
///
/// Rejections leave `board` untouched.
pub fn attempt_move(
    board: &mut Board,
    mv: Move,
    player: Side,
    tie_break: TieBreak,
) -> Result<MoveOutcome, MoveError> {
    let outcome = apply_move(board, mv, player, tie_break)?;
    board.apply(&outcome.delta);
    Ok(outcome)
}
