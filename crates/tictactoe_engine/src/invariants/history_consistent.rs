//! History consistency invariant: replaying the history reproduces the board.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: The board is exactly the result of replaying the history.
///
/// Every move in history corresponds to exactly one occupied square, no
/// square was overwritten, and no square is filled without a move. In
/// particular the number of moves equals the number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            // Square must be empty before placing
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *state.board() && state.board().occupied() == state.move_count()
    }

    fn description() -> &'static str {
        "Board matches replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut state = GameState::new();
        for (turn, index) in [0, 1, 2, 4, 3, 5, 7, 6, 8].into_iter().enumerate() {
            let player = if turn % 2 == 0 { Player::X } else { Player::O };
            state.apply_move(index, player).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.board().occupied(), state.move_count());
    }

    #[test]
    fn test_square_without_move_violates() {
        let mut state = GameState::new();
        state.apply_move(4, Player::X).unwrap();
        state.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_move_without_square_violates() {
        let mut state = GameState::new();
        state.history.push(Move::new(Player::X, Position::Center));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
