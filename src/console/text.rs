//! Plain-text board rendering and coordinate parsing.

use std::fmt::Write as _;

use thiserror::Error;

use crate::board::Board;
use crate::core::Coord;

/// Why a line of input is not a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected two numbers separated by a space, found {0} values")]
    WrongFieldCount(usize),

    #[error("`{0}` is not a non-negative number")]
    NotANumber(String),
}

/// Parse `row col`: exactly two non-negative integers.
///
/// ```
/// use tactego::console::parse_coord;
/// use tactego::core::Coord;
///
/// assert_eq!(parse_coord(" 3 4 "), Ok(Coord::new(3, 4)));
/// assert!(parse_coord("3").is_err());
/// assert!(parse_coord("-1 2").is_err());
/// ```
pub fn parse_coord(line: &str) -> Result<Coord, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = fields.as_slice() else {
        return Err(InputError::WrongFieldCount(fields.len()));
    };
    Ok(Coord::new(parse_index(row)?, parse_index(col)?))
}

fn parse_index(field: &str) -> Result<i32, InputError> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(field.to_string()));
    }
    field
        .parse()
        .map_err(|_| InputError::NotANumber(field.to_string()))
}

/// Render the board as a grid of piece labels with row and column indexes.
///
/// Columns are as wide as the longest label plus one; empty cells are blank.
/// Trailing whitespace is trimmed from each line.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let label_width = board
        .pieces()
        .map(|(_, piece)| piece.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2)
        + 1;
    let index_width = board.length().saturating_sub(1).to_string().len();

    let mut out = String::new();
    let mut line = " ".repeat(index_width + 1);
    for col in 0..board.width() {
        let _ = write!(line, "{:<label_width$} ", col);
    }
    push_line(&mut out, &line);
    out.push('\n');

    for row in 0..board.length() {
        line.clear();
        let _ = write!(line, "{:<index_width$} ", row);
        for col in 0..board.width() {
            let label = board
                .piece_at(Coord::new(row as i32, col as i32))
                .map(|p| p.to_string())
                .unwrap_or_default();
            let _ = write!(line, "{:<label_width$} ", label);
        }
        push_line(&mut out, &line);
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
