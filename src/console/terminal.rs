//! Line-oriented console adapters.

use std::io::{self, BufRead, Write};

use tracing::warn;

use super::text::{parse_coord, render_board};
use crate::board::Board;
use crate::core::{Move, Side};
use crate::game::{GameObserver, MoveSource, TurnOutcome};
use crate::rules::MoveError;

const BAD_INPUT: &str =
    "Invalid input. Please enter valid coordinates as two numbers separated by a space.";

/// Reads `row col` pairs from `input`, prompting on `output`.
///
/// Unparsable lines are answered with a hint and the prompt repeats; the
/// session only ever sees well-formed coordinates.
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt and read one line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleSource<R, W> {
    fn next_move(&mut self, side: Side, _board: &Board) -> io::Result<Option<Move>> {
        writeln!(self.output, "It's {}'s turn", side)?;
        loop {
            let Some(from) = self.ask("Enter coordinates (row column) to move from: ")? else {
                return Ok(None);
            };
            let Some(to) = self.ask("Enter coordinates (row column) to move to: ")? else {
                return Ok(None);
            };

            match (parse_coord(&from), parse_coord(&to)) {
                (Ok(from), Ok(to)) => return Ok(Some(Move::new(from, to))),
                _ => writeln!(self.output, "{}", BAD_INPUT)?,
            }
        }
    }

    fn rejected(&mut self, _side: Side, _mv: Move, error: &MoveError) {
        if let Err(e) = writeln!(self.output, "{}", error) {
            warn!(error = %e, "Failed to print rejection");
        }
    }
}

/// Prints the board after every accepted move and announces the winner.
pub struct ConsoleObserver<W> {
    output: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Print the board, e.g. before the first turn.
    pub fn show(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", render_board(board))
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn move_accepted(&mut self, _turn: &TurnOutcome, board: &Board) {
        if let Err(e) = self.show(board) {
            warn!(error = %e, "Failed to print board");
        }
    }

    fn game_over(&mut self, winner: Side, _board: &Board) {
        if let Err(e) = writeln!(self.output, "{} has won the game", winner) {
            warn!(error = %e, %winner, "Failed to announce winner");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_reads_move() {
        let input = io::Cursor::new("1 2\n2 2\n");
        let mut output = Vec::new();
        let mut source = ConsoleSource::new(input, &mut output);

        let mv = source.next_move(Side::Red, &Board::empty(3, 3)).unwrap();
        assert_eq!(mv, Some(Move::new(Coord::new(1, 2), Coord::new(2, 2))));

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("It's Red's turn"));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let input = io::Cursor::new("x y\n0 0\n0 0\n0 1\n");
        let mut output = Vec::new();
        let mut source = ConsoleSource::new(input, &mut output);

        let mv = source.next_move(Side::Blue, &Board::empty(2, 2)).unwrap();
        assert_eq!(mv, Some(Move::new(Coord::new(0, 0), Coord::new(0, 1))));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(BAD_INPUT).count(), 1);
    }

    #[test]
    fn test_end_of_input() {
        let input = io::Cursor::new("0 0\n");
        let mut source = ConsoleSource::new(input, io::sink());

        assert_eq!(source.next_move(Side::Red, &Board::empty(2, 2)).unwrap(), None);
    }

    #[test]
    fn test_observer_announces_winner() {
        let mut output = Vec::new();
        let mut observer = ConsoleObserver::new(&mut output);
        observer.game_over(Side::Blue, &Board::empty(1, 1));

        assert_eq!(String::from_utf8(output).unwrap(), "Blue has won the game\n");
    }

    /// Output that refuses every write.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failures_do_not_panic() {
        let board = Board::empty(1, 1);
        let mut observer = ConsoleObserver::new(Broken);
        assert!(observer.show(&board).is_err());
        observer.game_over(Side::Red, &board);

        let mut source = ConsoleSource::new(io::Cursor::new(""), Broken);
        let mv = Move::new(Coord::new(0, 0), Coord::new(0, 0));
        source.rejected(Side::Red, mv, &MoveError::Stationary);
    }
}
