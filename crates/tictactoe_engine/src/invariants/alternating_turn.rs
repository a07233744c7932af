//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
///
/// `apply_move` trusts its caller about whose turn it is, so this only
/// holds for well-behaved callers. The search checks it on entry.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().iter().enumerate().all(|(turn, mov)| {
            let expected = if turn % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut state = GameState::new();
        for (index, player) in [(0, Player::X), (4, Player::O), (2, Player::X), (1, Player::O)] {
            state.apply_move(index, player).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.to_move(), Player::X);
    }

    #[test]
    fn test_o_first_violates() {
        let mut state = GameState::new();
        state.apply_move(4, Player::O).unwrap();
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        state.apply_move(0, Player::X).unwrap();
        state.apply_move(4, Player::X).unwrap();
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
