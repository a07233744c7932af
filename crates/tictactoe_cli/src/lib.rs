//! Terminal front end for the tic-tac-toe engine.
//!
//! - [`session`]: interactive game, human X against the computer's O
//! - [`analyze`]: one-shot search report for a given move list
//! - [`config`]: pacing loaded from `tictactoe.toml`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use analyze::{AnalysisReport, analyze, write_report};
pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, PlayConfig};
pub use input::{InputError, parse_choice};
pub use session::{COMPUTER, HUMAN, Session};
