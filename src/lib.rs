//! # tactego
//!
//! Engine for a two-player board capture game in the style of Stratego.
//!
//! ## Rules in brief
//!
//! - Both sides start with the same pieces, read from a piece-count table.
//!   Red fills the board from the top-left, Blue from the bottom-right, each
//!   side's rank order shuffled from a seed.
//! - Players alternate, Red first, moving one piece one square in any of the
//!   8 directions. Flags never move.
//! - Moving onto an enemy piece attacks it: the higher rank wins, a Flag
//!   always falls, and equal ranks follow the configured `TieBreak`.
//! - Capturing the opponent's last Flag wins the game.
//!
//! ## Architecture
//!
//! - **Pure rules**: `rules::apply_move` validates a move and returns a
//!   `BoardDelta` without touching the board. The session applies it.
//! - **Single writer**: `GameSession` owns the board; presenters read it.
//! - **Adapters at the edge**: input and display go through `MoveSource` and
//!   `GameObserver`. The `console` module implements both for a terminal.
//! - **Deterministic setup**: `GameRng` (ChaCha8) seeds the layout shuffle.
//!
//! ## Modules
//!
//! - `core`: sides, coordinates, moves, RNG, configuration
//! - `pieces`: ranks, pieces, the piece-count table
//! - `board`: grid, deltas, setup
//! - `rules`: move legality and combat
//! - `game`: session state machine and adapter traits
//! - `console`: text rendering and terminal adapters

pub mod core;
pub mod pieces;
pub mod board;
pub mod rules;
pub mod game;
pub mod console;

// Re-export commonly used types
pub use crate::core::{Coord, GameConfig, GameRng, Move, Side, SideMap, TieBreak};

pub use crate::pieces::{Piece, PieceTable, PieceTableError, Rank};

pub use crate::board::{Board, BoardDelta, BoardView, Cell, CellChange, SetupError};

pub use crate::rules::{apply_move, attempt_move, Combat, CombatResult, MoveError, MoveOutcome};

pub use crate::game::{
    GameObserver, GameSession, GameStatus, MoveSource, NullObserver, ScriptedMoves,
    SessionError, TurnOutcome,
};
