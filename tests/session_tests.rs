//! Game session integration tests: win detection, terminal state, and
//! driving whole games through the adapter traits.

use std::io::Cursor;

use tactego::board::Board;
use tactego::console::{ConsoleObserver, ConsoleSource};
use tactego::core::{Coord, GameConfig, Move, Side, TieBreak};
use tactego::game::{
    GameObserver, GameSession, GameStatus, NullObserver, ScriptedMoves, SessionError,
    TurnOutcome,
};
use tactego::pieces::{Piece, PieceTable, Rank};
use tactego::rules::MoveError;

fn mv(fr: i32, fc: i32, tr: i32, tc: i32) -> Move {
    Move::new(Coord::new(fr, fc), Coord::new(tr, tc))
}

/// Counts observer callbacks.
#[derive(Default)]
struct Recorder {
    accepted: Vec<TurnOutcome>,
    winners: Vec<Side>,
}

impl GameObserver for Recorder {
    fn move_accepted(&mut self, turn: &TurnOutcome, _board: &Board) {
        self.accepted.push(turn.clone());
    }

    fn game_over(&mut self, winner: Side, _board: &Board) {
        self.winners.push(winner);
    }
}

// =============================================================================
// Win Detection
// =============================================================================

/// On a 2×2 board with `F 1` and one soldier per side, Red takes Blue's
/// Flag diagonally and wins at once.
#[test]
fn test_two_by_two_flag_capture() {
    let board = Board::empty(2, 2)
        .with_piece(Coord::new(0, 0), Piece::new(Side::Red, Rank::Numeric(1)))
        .with_piece(Coord::new(0, 1), Piece::new(Side::Red, Rank::Flag))
        .with_piece(Coord::new(1, 0), Piece::new(Side::Blue, Rank::Numeric(1)))
        .with_piece(Coord::new(1, 1), Piece::new(Side::Blue, Rank::Flag));
    let mut session = GameSession::from_board(board, TieBreak::default());

    let outcome = session.submit(mv(0, 0, 1, 1)).unwrap();

    assert_eq!(outcome.status, GameStatus::Won(Side::Red));
    assert_eq!(session.status(), GameStatus::Won(Side::Red));
    assert_eq!(session.board().flag_counts()[Side::Blue], 0);
}

/// The generated 2×2 board from a `F 1` table: each side holds only its
/// Flag, so no legal move exists and every request is rejected.
#[test]
fn test_generated_flag_only_board() {
    let table = PieceTable::parse("F 1").unwrap();
    let mut session = GameSession::new(&GameConfig::new(2, 2), &table).unwrap();

    assert_eq!(session.board().piece_at(Coord::new(0, 0)), Some(Piece::new(Side::Red, Rank::Flag)));
    assert_eq!(session.board().piece_at(Coord::new(1, 1)), Some(Piece::new(Side::Blue, Rank::Flag)));
    assert_eq!(session.submit(mv(0, 0, 1, 1)), Err(MoveError::FlagImmobile));
    assert_eq!(session.status(), GameStatus::InProgress);
}

/// Blue wins the instant Red's last Flag falls, and nothing moves after.
#[test]
fn test_blue_wins_and_game_is_terminal() {
    let board = Board::empty(3, 3)
        .with_piece(Coord::new(0, 0), Piece::new(Side::Red, Rank::Flag))
        .with_piece(Coord::new(2, 2), Piece::new(Side::Red, Rank::Numeric(2)))
        .with_piece(Coord::new(1, 1), Piece::new(Side::Blue, Rank::Numeric(2)))
        .with_piece(Coord::new(2, 0), Piece::new(Side::Blue, Rank::Flag));
    let mut session = GameSession::from_board(board, TieBreak::default());

    session.submit(mv(2, 2, 2, 1)).unwrap();
    let outcome = session.submit(mv(1, 1, 0, 0)).unwrap();
    assert_eq!(outcome.side, Side::Blue);
    assert_eq!(outcome.status, GameStatus::Won(Side::Blue));

    let frozen = session.board().clone();
    assert_eq!(session.submit(mv(2, 1, 2, 0)), Err(MoveError::GameOver));
    assert_eq!(session.submit(mv(0, 0, 0, 1)), Err(MoveError::GameOver));
    assert_eq!(session.board(), &frozen);
    assert_eq!(session.winner(), Some(Side::Blue));

    let err = session
        .play_turn(&mut ScriptedMoves::new([mv(2, 1, 2, 0)]), &mut NullObserver)
        .unwrap_err();
    assert!(matches!(err, SessionError::GameOver));
}

/// Mutual destruction of the only soldiers leaves the game in progress.
#[test]
fn test_trade_does_not_end_game() {
    let board = Board::empty(2, 3)
        .with_piece(Coord::new(0, 0), Piece::new(Side::Red, Rank::Flag))
        .with_piece(Coord::new(0, 1), Piece::new(Side::Red, Rank::Numeric(3)))
        .with_piece(Coord::new(1, 1), Piece::new(Side::Blue, Rank::Numeric(3)))
        .with_piece(Coord::new(1, 2), Piece::new(Side::Blue, Rank::Flag));
    let mut session = GameSession::from_board(board, TieBreak::MutualDestruction);

    let outcome = session.submit(mv(0, 1, 1, 1)).unwrap();

    assert_eq!(outcome.status, GameStatus::InProgress);
    assert_eq!(session.active_player(), Side::Blue);
    assert_eq!(session.board().pieces().count(), 2);
}

// =============================================================================
// Driving Games
// =============================================================================

/// A scripted game: rejected requests are retried, the observer sees every
/// accepted move and exactly one result.
#[test]
fn test_scripted_game() {
    // .  .  .  RF
    // .  .  R5 .
    // .  B4 .  .
    // .  BF .  B1
    let board = Board::empty(4, 4)
        .with_piece(Coord::new(0, 3), Piece::new(Side::Red, Rank::Flag))
        .with_piece(Coord::new(1, 2), Piece::new(Side::Red, Rank::Numeric(5)))
        .with_piece(Coord::new(2, 1), Piece::new(Side::Blue, Rank::Numeric(4)))
        .with_piece(Coord::new(3, 1), Piece::new(Side::Blue, Rank::Flag))
        .with_piece(Coord::new(3, 3), Piece::new(Side::Blue, Rank::Numeric(1)));
    let mut session = GameSession::from_board(board, TieBreak::default());

    let mut source = ScriptedMoves::new([
        mv(1, 2, 3, 2), // too far
        mv(1, 2, 2, 1), // Red 5 beats Blue 4
        mv(0, 3, 0, 2), // Blue touching Red's Flag
        mv(3, 1, 3, 0), // Blue's own Flag
        mv(9, 9, 0, 0), // off board
        mv(3, 3, 2, 3),
        mv(2, 1, 3, 1), // Red takes the Flag
    ]);
    let mut recorder = Recorder::default();

    let winner = session.play(&mut source, &mut recorder).unwrap();

    assert_eq!(winner, Side::Red);
    assert_eq!(source.remaining(), 0);
    assert_eq!(recorder.accepted.len(), 3);
    assert_eq!(recorder.winners, vec![Side::Red]);
    assert_eq!(
        recorder.accepted.iter().map(|t| t.side).collect::<Vec<_>>(),
        vec![Side::Red, Side::Blue, Side::Red]
    );

    let reasons: Vec<_> = source.rejections().iter().map(|r| r.2).collect();
    assert_eq!(
        reasons,
        vec![
            MoveError::TooFar,
            MoveError::NotYourPiece,
            MoveError::FlagImmobile,
            MoveError::OutOfBounds(Coord::new(9, 9)),
        ]
    );
}

/// Running out of input mid-game is reported, not looped on.
#[test]
fn test_input_closed_mid_game() {
    let board = Board::empty(2, 2)
        .with_piece(Coord::new(0, 0), Piece::new(Side::Red, Rank::Numeric(1)))
        .with_piece(Coord::new(1, 1), Piece::new(Side::Blue, Rank::Flag));
    let mut session = GameSession::from_board(board, TieBreak::default());
    let mut source = ScriptedMoves::new([mv(0, 0, 0, 0)]);

    let err = session.play(&mut source, &mut NullObserver).unwrap_err();

    assert!(matches!(err, SessionError::InputClosed));
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(source.rejections()[0].2, MoveError::Stationary);
}

/// A full game played through the console adapters.
#[test]
fn test_console_game_to_completion() {
    // RF R2 .  .
    // .  .  B1 BF
    let board = Board::empty(2, 4)
        .with_piece(Coord::new(0, 0), Piece::new(Side::Red, Rank::Flag))
        .with_piece(Coord::new(0, 1), Piece::new(Side::Red, Rank::Numeric(2)))
        .with_piece(Coord::new(1, 2), Piece::new(Side::Blue, Rank::Numeric(1)))
        .with_piece(Coord::new(1, 3), Piece::new(Side::Blue, Rank::Flag));
    let mut session = GameSession::from_board(board, TieBreak::default());

    let script = "\
0 1
0 2
oops
1 2
1 2
1 1
0 2
1 3
";
    let mut transcript = Vec::new();
    let mut shown = Vec::new();
    let winner = {
        let mut source = ConsoleSource::new(Cursor::new(script), &mut transcript);
        let mut observer = ConsoleObserver::new(&mut shown);
        session.play(&mut source, &mut observer).unwrap()
    };

    assert_eq!(winner, Side::Red);
    assert_eq!(session.status(), GameStatus::Won(Side::Red));

    let transcript = String::from_utf8(transcript).unwrap();
    assert!(transcript.contains("It's Red's turn"));
    assert!(transcript.contains("It's Blue's turn"));
    assert!(transcript.contains("Invalid input."));

    let shown = String::from_utf8(shown).unwrap();
    assert!(shown.ends_with("Red has won the game\n"));
    assert_eq!(shown.matches("has won").count(), 1);
}
