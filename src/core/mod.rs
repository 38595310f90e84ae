//! Core engine types: sides, coordinates, moves, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{Side, SideMap};
pub use rng::GameRng;
pub use config::{GameConfig, TieBreak};
pub use action::{Coord, Move};
