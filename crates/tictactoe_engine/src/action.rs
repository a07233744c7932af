//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Creates a move from a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `index` is not in 0-8.
    pub fn from_index(player: Player, index: usize) -> Result<Self, MoveError> {
        Position::from_index(index)
            .map(|position| Self::new(player, position))
            .ok_or(MoveError::OutOfRange(index))
    }

    /// Board index of this move (0-8).
    pub fn index(&self) -> usize {
        self.position.to_index()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error raised when a move cannot be applied.
///
/// Recoverable: the state is left untouched and the caller may retry
/// with another index.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after applying the move (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_in_range() {
        let mov = Move::from_index(Player::O, 4).expect("center is on the board");
        assert_eq!(mov.position, Position::Center);
        assert_eq!(mov.index(), 4);
        assert_eq!(mov.to_string(), "O -> Center");
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Move::from_index(Player::X, 9), Err(MoveError::OutOfRange(9)));
    }
}
