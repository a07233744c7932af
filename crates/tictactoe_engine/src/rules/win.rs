//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::error;

/// Three positions that win the game when held by one player.
pub type WinningLine = [Position; 3];

/// The 8 winning lines: rows, columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` holds all three squares of any winning line.
pub fn completes_line(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

/// Checks if there is a winner on the board.
///
/// Alternating play never lets both players complete a line. Such a board
/// is an internal-consistency failure: it is logged, trips a debug
/// assertion, and release builds report O (the later player checked).
pub fn check_winner(board: &Board) -> Option<Player> {
    let x_wins = completes_line(board, Player::X);
    let o_wins = completes_line(board, Player::O);

    if x_wins && o_wins {
        error!(board = %board.display(), "Both players hold a winning line");
    }
    debug_assert!(!(x_wins && o_wins), "both players hold a winning line");

    match (x_wins, o_wins) {
        (_, true) => Some(Player::O),
        (true, false) => Some(Player::X),
        (false, false) => None,
    }
}
