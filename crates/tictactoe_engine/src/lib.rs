//! Tic-tac-toe engine: game state plus exhaustive minimax search.
//!
//! # Architecture
//!
//! - **State**: board, move history and derived turn ([`GameState`])
//! - **Rules**: winning lines and draw detection ([`rules`])
//! - **Search**: unpruned minimax choosing the computer's move ([`search()`])
//! - **Invariants / contracts**: checked properties of every applied move
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameState, Player, best_move};
//!
//! let mut state = GameState::new();
//! state.apply_move(4, Player::X).unwrap();
//!
//! let reply = best_move(&state).expect("game is not over");
//! state.apply_move(reply, Player::O).unwrap();
//! assert_eq!(state.move_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod search;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use outcome::{Outcome, Terminal};
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine};
pub use search::{SearchOutcome, SearchStats, best_move, search, search_with_stats, terminal_score};
pub use state::GameState;
pub use types::{Board, Player, Square};

/// Creates a new game: empty board, X to move.
pub fn new_game() -> GameState {
    GameState::new()
}
