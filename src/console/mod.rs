//! Console front-end: text rendering, coordinate parsing, and stdin/stdout
//! adapters for the session.

pub mod text;
pub mod terminal;

pub use text::{parse_coord, render_board, InputError};
pub use terminal::{ConsoleObserver, ConsoleSource};
