//! Tests for the minimax search.

use tictactoe_engine::{
    GameState, Outcome, Player, SearchStats, best_move, search, search_with_stats,
};

fn play(moves: &[usize]) -> GameState {
    let mut state = GameState::new();
    for &index in moves {
        let player = state.to_move();
        state.apply_move(index, player).unwrap();
    }
    state
}

/// Plays every X strategy against the search from `state` (X to move) and
/// returns the outcomes reached.
fn outcomes_against_all_x_lines(state: &GameState, outcomes: &mut Vec<Outcome>) {
    if let Some(outcome) = state.outcome() {
        outcomes.push(outcome);
        return;
    }
    for index in state.available_moves() {
        let mut after_x = state.clone();
        after_x.apply_move(index, Player::X).unwrap();
        if let Some(outcome) = after_x.outcome() {
            outcomes.push(outcome);
            continue;
        }
        let reply = best_move(&after_x).expect("game continues after X");
        assert!(after_x.available_moves().contains(&reply));
        let mut after_o = after_x;
        after_o.apply_move(reply, Player::O).unwrap();
        outcomes_against_all_x_lines(&after_o, outcomes);
    }
}

#[test]
fn test_empty_board_is_a_draw() {
    let mut stats = SearchStats::default();
    let outcome = search_with_stats(&GameState::new(), true, &mut stats);
    assert_eq!(outcome.score, 0);
    assert_eq!(stats.nodes, 549_946);
    assert_eq!(stats.leaves, 255_168);
}

#[test]
fn test_search_move_is_available() {
    // Every non-terminal state with O to move after up to four X moves
    let mut frontier = vec![GameState::new()];
    for _ in 0..4 {
        let mut next_frontier = Vec::new();
        for state in frontier {
            for x_move in state.available_moves() {
                let mut after_x = state.clone();
                after_x.apply_move(x_move, Player::X).unwrap();
                if after_x.evaluate_terminal().is_over {
                    continue;
                }

                let outcome = search(&after_x, true);
                let chosen = outcome.best_move.expect("non-terminal state has a move");
                assert!(after_x.available_moves().contains(&chosen));

                for o_move in after_x.available_moves() {
                    let mut after_o = after_x.clone();
                    after_o.apply_move(o_move, Player::O).unwrap();
                    if !after_o.evaluate_terminal().is_over {
                        next_frontier.push(after_o);
                    }
                }
            }
        }
        frontier = next_frontier;
    }
}

#[test]
fn test_completes_own_row() {
    // O holds 3 and 4 with 5 open; O to move
    let state = play(&[0, 3, 1, 4, 8]);
    assert_eq!(state.to_move(), Player::O);

    let outcome = search(&state, true);
    assert_eq!(outcome.best_move, Some(5));
    assert!(outcome.score > 0);
    assert_eq!(outcome.score, 10 - 6);
}

#[test]
fn test_never_loses_after_any_first_move() {
    for first in 0..9 {
        let state = play(&[first]);
        let reply = best_move(&state).expect("game continues");
        let mut state = state;
        state.apply_move(reply, Player::O).unwrap();

        let mut outcomes = Vec::new();
        outcomes_against_all_x_lines(&state, &mut outcomes);
        assert!(!outcomes.is_empty());
        assert!(
            outcomes.iter().all(|o| *o != Outcome::Winner(Player::X)),
            "X found a win after opening at {first}"
        );
    }
}

#[test]
fn test_search_leaves_input_untouched() {
    let state = play(&[4, 0, 8]);
    let before = state.clone();
    search(&state, true);
    assert_eq!(state, before);
}

#[test]
fn test_ties_resolve_to_lowest_index() {
    // Against a center opening every corner draws; the first corner wins the tie
    let state = play(&[4]);
    let outcome = search(&state, true);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.best_move, Some(0));
}
