//! Game outcome types.

use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(super::Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<super::Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of evaluating a state for termination.
///
/// `is_over` is true when there is a winner or the board is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    /// The winning player, if any.
    pub winner: Option<super::Player>,
    /// Whether the game has ended.
    pub is_over: bool,
}

impl Terminal {
    /// Converts to an [`Outcome`], or `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.is_over, self.winner) {
            (false, _) => None,
            (true, Some(player)) => Some(Outcome::Winner(player)),
            (true, None) => Some(Outcome::Draw),
        }
    }
}
