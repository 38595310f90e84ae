//! Turn and game state machine.
//!
//! A session starts `InProgress` with Red to move. Each accepted move is
//! applied, both sides' Flags are counted, and the session either ends
//! `Won(side)` or hands the turn over. Once won, every further move is
//! rejected with [`MoveError::GameOver`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, trace};

use super::adapter::{GameObserver, MoveSource};
use crate::board::{setup, Board, SetupError};
use crate::core::{GameConfig, GameRng, Move, Side, TieBreak};
use crate::pieces::PieceTable;
use crate::rules::{self, Combat, MoveError};

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// Errors from the adapter-driven loops.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("move input ended before the game finished")]
    InputClosed,

    #[error("the game is already over")]
    GameOver,

    #[error("failed to read move input: {0}")]
    Io(#[from] std::io::Error),
}

/// Report of one accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Turn number the move was made on (starts at 1).
    pub turn: u32,
    pub side: Side,
    pub mv: Move,
    pub combat: Option<Combat>,
    /// Status after the move.
    pub status: GameStatus,
}

/// One game from setup to result.
///
/// The session owns the board and is its only writer; presenters read it
/// through [`board`](Self::board) or [`Board::view`].
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    active: Side,
    status: GameStatus,
    tie_break: TieBreak,
    turn: u32,
}

impl GameSession {
    /// Set up a new game from a configuration and piece table.
    pub fn new(config: &GameConfig, table: &PieceTable) -> Result<Self, SetupError> {
        let rng = GameRng::new(config.seed);
        let board = setup::generate(table, config.length, config.width, &rng)?;
        Ok(Self::from_board(board, config.tie_break))
    }

    /// Start a game from an explicit layout, Red to move.
    #[must_use]
    pub fn from_board(board: Board, tie_break: TieBreak) -> Self {
        Self {
            board,
            active: Side::Red,
            status: GameStatus::InProgress,
            tie_break,
            turn: 1,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. After the game ends this is the side that would have
    /// moved next.
    #[must_use]
    pub fn active_player(&self) -> Side {
        self.active
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            GameStatus::InProgress => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Submit a move for the active side.
    ///
    /// Rejections leave the session unchanged.
    pub fn submit(&mut self, mv: Move) -> Result<TurnOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let side = self.active;
        let outcome = rules::apply_move(&self.board, mv, side, self.tie_break)?;
        self.board.apply(&outcome.delta);

        let flags = self.board.flag_counts();
        self.status = if flags[side.opponent()] == 0 {
            GameStatus::Won(side)
        } else if flags[side] == 0 {
            GameStatus::Won(side.opponent())
        } else {
            GameStatus::InProgress
        };

        debug!(
            turn = self.turn,
            side = %side,
            mv = %mv,
            combat = ?outcome.combat.map(|c| c.result),
            "Move accepted"
        );

        let report = TurnOutcome {
            turn: self.turn,
            side,
            mv,
            combat: outcome.combat,
            status: self.status,
        };

        match self.status {
            GameStatus::Won(winner) => {
                info!(winner = %winner, turn = self.turn, "Game over");
            }
            GameStatus::InProgress => {
                self.active = side.opponent();
                self.turn += 1;
            }
        }

        Ok(report)
    }

    /// Ask `source` for moves until one is accepted.
    ///
    /// Each rejection is reported back to the source. The observer hears
    /// about the accepted move and, if it ended the game, the result.
    pub fn play_turn(
        &mut self,
        source: &mut impl MoveSource,
        observer: &mut impl GameObserver,
    ) -> Result<TurnOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        let side = self.active;
        loop {
            let mv = source
                .next_move(side, &self.board)?
                .ok_or(SessionError::InputClosed)?;

            match self.submit(mv) {
                Ok(outcome) => {
                    observer.move_accepted(&outcome, &self.board);
                    if let GameStatus::Won(winner) = outcome.status {
                        observer.game_over(winner, &self.board);
                    }
                    return Ok(outcome);
                }
                Err(error) => {
                    trace!(side = %side, mv = %mv, %error, "Move rejected");
                    source.rejected(side, mv, &error);
                }
            }
        }
    }

    /// Play turns until the game is won, returning the winner.
    pub fn play(
        &mut self,
        source: &mut impl MoveSource,
        observer: &mut impl GameObserver,
    ) -> Result<Side, SessionError> {
        loop {
            if let GameStatus::Won(winner) = self.play_turn(source, observer)?.status {
                return Ok(winner);
            }
        }
    }
}
