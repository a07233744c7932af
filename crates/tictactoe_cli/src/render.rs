//! Terminal drawing.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use tictactoe_engine::{Board, Outcome, Player};

/// Clears the terminal and homes the cursor.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Writes the board, optionally clearing the screen first.
pub fn draw_board(out: &mut impl Write, board: &Board, clear: bool) -> io::Result<()> {
    if clear {
        clear_screen(out)?;
    }
    writeln!(out, "{}\n", board.display())?;
    out.flush()
}

/// Closing line for a finished game.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome.winner() {
        Some(Player::X) => "Player 1 wins! Congratulations, human!",
        Some(Player::O) => "Computer wins!",
        None => "It's a tie!",
    }
}
