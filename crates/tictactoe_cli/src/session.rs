//! One interactive game: the human plays X, the search plays O.

use crate::config::PlayConfig;
use crate::input::parse_choice;
use crate::render::{draw_board, outcome_message};
use anyhow::{Context, bail};
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_engine::{Board, GameState, Outcome, Player, best_move};
use tracing::{debug, info, instrument};

/// Side played by the person at the keyboard.
pub const HUMAN: Player = Player::X;

/// Side played by the search.
pub const COMPUTER: Player = Player::O;

/// A game wired to an input reader and an output writer.
///
/// Generic over the streams so tests can script a whole game.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the session and returns the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays a full game and returns its outcome.
    ///
    /// # Errors
    ///
    /// Fails if the input closes before the game ends or the output
    /// cannot be written.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        self.introduce()?;

        let mut state = GameState::new();
        self.draw(&state)?;

        let outcome = loop {
            writeln!(self.output, "It's your turn, please choose a move:")?;
            let choice = self.read_human_move(&state)?;
            state.apply_move(choice, HUMAN)?;
            self.draw(&state)?;
            if let Some(outcome) = state.outcome() {
                break outcome;
            }

            writeln!(self.output, "Computer's turn...")?;
            self.output.flush()?;
            let reply =
                best_move(&state).context("search returned no move for a game in progress")?;
            self.pause(*self.config.computer_delay_ms());
            state.apply_move(reply, COMPUTER)?;
            info!(human = choice, computer = reply, "Round complete");
            self.draw(&state)?;
            if let Some(outcome) = state.outcome() {
                break outcome;
            }
        };

        self.pause(*self.config.computer_delay_ms());
        writeln!(self.output, "{}", outcome_message(outcome))?;
        self.output.flush()?;
        info!(%outcome, moves = state.move_count(), "Game over");
        Ok(outcome)
    }

    fn introduce(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "\nGet ready to play! You will be X's and the computer will be O's!"
        )?;
        writeln!(
            self.output,
            "To place an X, type the number of the square you want.\n"
        )?;
        self.output.flush()?;
        self.pause(*self.config.intro_delay_ms());

        writeln!(
            self.output,
            "Here's the layout of the board:\n{}\n",
            Board::new().display()
        )?;
        self.output.flush()?;
        self.pause(*self.config.layout_delay_ms());

        let from = *self.config.countdown_from();
        if from > 0 {
            write!(self.output, "Game starting in...")?;
            for n in (1..=from).rev() {
                self.output.flush()?;
                self.pause(*self.config.countdown_step_ms());
                write!(self.output, "{}...", n)?;
            }
            writeln!(self.output)?;
            self.output.flush()?;
            self.pause(*self.config.countdown_step_ms());
        }
        Ok(())
    }

    fn read_human_move(&mut self, state: &GameState) -> anyhow::Result<usize> {
        let mut line = String::new();
        loop {
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before the game finished");
            }

            match parse_choice(&line, state) {
                Ok(index) => {
                    writeln!(self.output, "Player chose: {}", index + 1)?;
                    return Ok(index);
                }
                Err(err) => {
                    debug!(input = line.trim(), %err, "Rejected input");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    fn draw(&mut self, state: &GameState) -> anyhow::Result<()> {
        draw_board(&mut self.output, state.board(), *self.config.clear_screen())?;
        Ok(())
    }

    fn pause(&self, ms: u64) {
        if ms > 0 {
            std::thread::sleep(Duration::from_millis(ms));
        }
    }
}
