//! Unique moves invariant: no position appears twice in the history.

use super::super::GameState;
use super::Invariant;

/// Invariant: Every position in the history is distinct.
///
/// Range (0-8) is carried by the `Position` type itself.
pub struct UniqueMovesInvariant;

impl Invariant<GameState> for UniqueMovesInvariant {
    fn holds(state: &GameState) -> bool {
        let mut seen: u16 = 0;
        for mov in state.history() {
            let bit = 1 << mov.index();
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        true
    }

    fn description() -> &'static str {
        "Each position is played at most once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_distinct_moves_hold() {
        let mut state = GameState::new();
        state.apply_move(0, Player::X).unwrap();
        state.apply_move(8, Player::O).unwrap();
        assert!(UniqueMovesInvariant::holds(&state));
    }

    #[test]
    fn test_repeated_position_violates() {
        let mut state = GameState::new();
        state.apply_move(0, Player::X).unwrap();
        state.history.push(Move::new(Player::O, Position::TopLeft));
        assert!(!UniqueMovesInvariant::holds(&state));
    }
}
