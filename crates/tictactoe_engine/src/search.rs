//! Exhaustive minimax search for the computer's move.
//!
//! The search always plays the computer's (O's) side: positive scores favor
//! O, negative scores favor X. Faster wins score higher and faster losses
//! score lower, so O wins as quickly as it can and loses as slowly as it can.
//!
//! Every continuation runs on its own clone of the parent state. Nothing is
//! undone and no branch sees another's moves.

use super::invariants::{InvariantSet, WellFormed};
use super::{GameState, Move, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Best move found by the search and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Board index (0-8) of the chosen move.
    ///
    /// At a terminal state this is the move that ended the game, which
    /// callers never play. `None` only for a terminal state with no moves,
    /// which alternating play cannot reach.
    pub best_move: Option<usize>,
    /// Minimax score from O's point of view.
    pub score: i32,
}

/// Node counts for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States visited, including the root.
    pub nodes: u64,
    /// Terminal states reached.
    pub leaves: u64,
}

/// Score of a finished game of `move_count` moves.
pub fn terminal_score(winner: Option<Player>, move_count: usize) -> i32 {
    let moves = move_count as i32;
    match winner {
        Some(Player::X) => moves - 10,
        Some(Player::O) => 10 - moves,
        None => 0,
    }
}

/// Searches every continuation of `state`.
///
/// `maximizing` is true when it is the computer's turn. When maximizing,
/// the returned move is the one played at this level; when minimizing, it
/// is the computer's reply carried up from the chosen continuation. Ties
/// keep the first continuation in ascending index order.
pub fn search(state: &GameState, maximizing: bool) -> SearchOutcome {
    let mut stats = SearchStats::default();
    search_with_stats(state, maximizing, &mut stats)
}

/// Like [`search`], also accumulating node counts into `stats`.
#[instrument(skip(state, stats), fields(move_count = state.move_count()))]
pub fn search_with_stats(
    state: &GameState,
    maximizing: bool,
    stats: &mut SearchStats,
) -> SearchOutcome {
    debug_assert!(
        WellFormed::check_all(state).is_ok(),
        "search requires a state reached by alternating play"
    );

    let outcome = minimax(state, maximizing, stats);
    debug!(
        best_move = ?outcome.best_move,
        score = outcome.score,
        nodes = stats.nodes,
        leaves = stats.leaves,
        "Search complete"
    );
    outcome
}

/// The computer's move for `state`, or `None` once the game is over.
#[instrument(skip(state), fields(move_count = state.move_count()))]
pub fn best_move(state: &GameState) -> Option<usize> {
    if state.evaluate_terminal().is_over {
        return None;
    }
    search(state, true).best_move
}

fn minimax(state: &GameState, maximizing: bool, stats: &mut SearchStats) -> SearchOutcome {
    stats.nodes += 1;

    let terminal = state.evaluate_terminal();
    if terminal.is_over {
        stats.leaves += 1;
        return SearchOutcome {
            best_move: state.last_move().map(Position::to_index),
            score: terminal_score(terminal.winner, state.move_count()),
        };
    }

    let player = state.to_move();
    let mut best = SearchOutcome {
        best_move: None,
        score: if maximizing { i32::MIN } else { i32::MAX },
    };

    for position in state.available_positions() {
        let mut next = state.clone();
        next.place(Move::new(player, position));

        let reply = minimax(&next, !maximizing, stats);

        let improves = if maximizing {
            reply.score > best.score
        } else {
            reply.score < best.score
        };
        if improves {
            best = SearchOutcome {
                best_move: if maximizing {
                    Some(position.to_index())
                } else {
                    reply.best_move
                },
                score: reply.score,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &index in moves {
            let player = state.to_move();
            state.apply_move(index, player).unwrap();
        }
        state
    }

    #[test]
    fn test_terminal_score() {
        assert_eq!(terminal_score(Some(Player::X), 5), -5);
        assert_eq!(terminal_score(Some(Player::O), 6), 4);
        assert_eq!(terminal_score(None, 9), 0);
    }

    #[test]
    fn test_terminal_root_reports_last_move() {
        // X takes the top row
        let state = play(&[0, 3, 1, 4, 2]);
        let mut stats = SearchStats::default();
        let outcome = search_with_stats(&state, true, &mut stats);
        assert_eq!(
            outcome,
            SearchOutcome {
                best_move: Some(2),
                score: -5
            }
        );
        assert_eq!(
            stats,
            SearchStats {
                nodes: 1,
                leaves: 1
            }
        );
        assert_eq!(best_move(&state), None);
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X holds 0 and 1 and threatens 2; O has nothing to win with
        let state = play(&[0, 4, 1]);
        assert_eq!(search(&state, true).best_move, Some(2));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // O can complete 3-4-5 or block X's 0-1-2
        let state = play(&[0, 3, 1, 4, 8]);
        let outcome = search(&state, true);
        assert_eq!(outcome.best_move, Some(5));
        assert_eq!(outcome.score, 10 - 6);
    }

    #[test]
    fn test_minimizing_assumes_opponent_wins() {
        // X to move and can take the top row; the minimizing side finds it
        let state = play(&[0, 3, 1, 4]);
        assert_eq!(
            search(&state, false),
            SearchOutcome {
                best_move: Some(2),
                score: -5
            }
        );
    }

    #[test]
    fn test_last_cell_forced() {
        // X O X / X O O / O X _ with X to move
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6]);
        assert_eq!(state.available_moves(), vec![8]);
        let outcome = search(&state, false);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.best_move, Some(8));
    }
}
