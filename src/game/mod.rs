//! Game session: turn order, win detection, and the adapter seams.

pub mod adapter;
pub mod session;

pub use adapter::{GameObserver, MoveSource, NullObserver, ScriptedMoves};
pub use session::{GameSession, GameStatus, SessionError, TurnOutcome};
