//! Offline analysis of a position given as a list of squares.

use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use tictactoe_engine::{
    Board, GameState, Move, Player, SearchOutcome, SearchStats, Terminal, search_with_stats,
};
use tracing::instrument;

/// What the engine makes of a position.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Squares played, 1-9, in order.
    pub moves: Vec<usize>,
    /// Board after the moves.
    pub board: Board,
    /// Player whose turn it is.
    pub to_move: Player,
    /// Winner and whether the game is over.
    pub terminal: Terminal,
    /// Search result; absent once the game is over.
    pub search: Option<SearchOutcome>,
    /// Node counts for the search.
    pub stats: SearchStats,
}

/// Plays `moves` (1-9, alternating from X) and searches the result.
///
/// The search maximizes when O is to move. With X to move the reported
/// move is O's expected reply further down the line.
///
/// # Errors
///
/// Fails on a square outside 1-9, an occupied square, or a move after
/// the game has ended.
#[instrument]
pub fn analyze(moves: &[usize]) -> anyhow::Result<AnalysisReport> {
    let plays = moves
        .iter()
        .zip([Player::X, Player::O].into_iter().cycle())
        .map(|(&square, player)| {
            square
                .checked_sub(1)
                .and_then(|index| Move::from_index(player, index).ok())
                .with_context(|| format!("Square {} is out of range (1-9)", square))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let state = GameState::replay(&plays).context("Cannot replay the moves")?;

    let terminal = state.evaluate_terminal();
    let to_move = state.to_move();
    let mut stats = SearchStats::default();
    let search = if terminal.is_over {
        None
    } else {
        Some(search_with_stats(&state, to_move == Player::O, &mut stats))
    };

    Ok(AnalysisReport {
        moves: moves.to_vec(),
        board: state.board().clone(),
        to_move,
        terminal,
        search,
        stats,
    })
}

/// Writes a report as text or pretty JSON.
pub fn write_report(
    report: &AnalysisReport,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}\n", report.board.display())?;
    match report.terminal.outcome() {
        Some(outcome) => writeln!(out, "Game over: {}", outcome)?,
        None => writeln!(out, "To move: {}", report.to_move)?,
    }

    if let Some(search) = &report.search {
        let label = match report.to_move {
            Player::O => "Best move for O",
            Player::X => "Expected O reply",
        };
        match search.best_move {
            Some(index) => writeln!(out, "{}: {} (score {})", label, index + 1, search.score)?,
            None => writeln!(out, "{}: none (score {})", label, search.score)?,
        }
        writeln!(
            out,
            "Searched {} positions, {} finished games",
            report.stats.nodes, report.stats.leaves
        )?;
    }
    Ok(())
}
