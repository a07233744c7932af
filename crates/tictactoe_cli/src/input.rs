//! Validation of the human's typed move.
//!
//! The board is numbered 1-9 for people and 0-8 for the engine; this is
//! the only place the two meet.

use derive_more::Display;
use std::num::IntErrorKind;
use tictactoe_engine::GameState;

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Not an integer.
    #[display("That's not a number, try again.")]
    NotANumber,

    /// An integer outside 1-9, as typed.
    #[display("{} is out of range, try again.", _0)]
    OutOfRange(String),

    /// A square that is already occupied.
    #[display("{} is already taken, choose again.", _0)]
    Taken(usize),
}

impl std::error::Error for InputError {}

/// Parses a 1-based square number and returns its board index.
///
/// # Errors
///
/// Returns an [`InputError`] describing why the input was rejected.
pub fn parse_choice(input: &str, state: &GameState) -> Result<usize, InputError> {
    let text = input.trim();
    let choice: i64 = text.parse().map_err(|err: std::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::OutOfRange(text.to_string())
        }
        _ => InputError::NotANumber,
    })?;
    if !(1..=9).contains(&choice) {
        return Err(InputError::OutOfRange(choice.to_string()));
    }

    let index = (choice - 1) as usize;
    if !state.available_moves().contains(&index) {
        return Err(InputError::Taken(index + 1));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Player;

    #[test]
    fn test_accepts_free_square() {
        assert_eq!(parse_choice(" 5\n", &GameState::new()), Ok(4));
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = parse_choice("five", &GameState::new()).unwrap_err();
        assert_eq!(err, InputError::NotANumber);
        assert_eq!(err.to_string(), "That's not a number, try again.");
    }

    #[test]
    fn test_rejects_out_of_range() {
        let state = GameState::new();
        assert_eq!(
            parse_choice("0", &state),
            Err(InputError::OutOfRange("0".to_string()))
        );
        assert_eq!(
            parse_choice("10", &state),
            Err(InputError::OutOfRange("10".to_string()))
        );
        assert_eq!(
            parse_choice("-3", &state).unwrap_err().to_string(),
            "-3 is out of range, try again."
        );
    }

    #[test]
    fn test_huge_numbers_are_out_of_range() {
        let state = GameState::new();
        assert_eq!(
            parse_choice("99999999999999999999", &state).unwrap_err().to_string(),
            "99999999999999999999 is out of range, try again."
        );
        assert_eq!(
            parse_choice("-99999999999999999999", &state),
            Err(InputError::OutOfRange("-99999999999999999999".to_string()))
        );
        assert_eq!(parse_choice("9x", &state), Err(InputError::NotANumber));
    }

    #[test]
    fn test_rejects_taken_square() {
        let mut state = GameState::new();
        state.apply_move(4, Player::X).unwrap();
        let err = parse_choice("5", &state).unwrap_err();
        assert_eq!(err, InputError::Taken(5));
        assert_eq!(err.to_string(), "5 is already taken, choose again.");
    }
}
