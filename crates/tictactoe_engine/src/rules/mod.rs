//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from state bookkeeping so the search and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinningLine, check_winner, completes_line};
