//! Game state: board, move history and derived turn.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::outcome::{Outcome, Terminal};
use super::rules;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// The player to move is not stored: it is derived from the number of
/// moves played, so it can never drift from the history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Every move played, in order.
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of completed moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        if self.history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The most recently applied move, if any.
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().map(|mov| mov.position)
    }

    /// Positions occupied by `player`, in the order they were played.
    pub fn moves_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.history
            .iter()
            .filter(move |mov| mov.player == player)
            .map(|mov| mov.position)
    }

    /// Empty positions in ascending index order.
    pub fn available_positions(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Indices of empty squares in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.available_positions()
            .into_iter()
            .map(Position::to_index)
            .collect()
    }

    /// Places `player`'s mark at `index`.
    ///
    /// Whose turn it is is not checked: callers pass the player they mean.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `index` is not in 0-8
    /// - [`MoveError::SquareOccupied`] if the square is taken
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(move_count = self.history.len()))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let action = Move::from_index(player, index)?;
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.place(action);

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            tracing::warn!(error = %err, "Move postcondition failed, rolling back");
            *self = before;
            return Err(err);
        }

        debug!(%action, "Move applied");
        Ok(())
    }

    /// Applies a move that is already known to be legal.
    ///
    /// Used by the search, which only plays positions taken from
    /// [`available_positions`](Self::available_positions).
    pub(crate) fn place(&mut self, action: Move) {
        self.board.set(action.position, Square::Occupied(action.player));
        self.history.push(action);
    }

    /// Reports the winner (if any) and whether the game is over.
    pub fn evaluate_terminal(&self) -> Terminal {
        let winner = rules::check_winner(&self.board);
        Terminal {
            winner,
            is_over: winner.is_some() || rules::is_full(&self.board),
        }
    }

    /// Outcome of the game, or `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.evaluate_terminal().outcome()
    }

    /// Replays moves from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered, or
    /// [`MoveError::GameOver`] for a move after the game has ended.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for mov in moves {
            if state.evaluate_terminal().is_over {
                return Err(MoveError::GameOver);
            }
            state.apply_move(mov.index(), mov.player)?;
        }
        Ok(state)
    }
}
