//! tictactoe: play against an exhaustive minimax search.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, Command, PlayArgs, PlayConfig, Session, analyze, write_report};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the game; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe_engine=info")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => play(args),
        Command::Analyze { moves, json } => {
            let report = analyze(&moves)?;
            write_report(&report, json, &mut io::stdout().lock())
        }
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let mut config = PlayConfig::load_or_default(&args.config)?;
    if args.fast {
        config = config.without_delays();
    }
    if args.no_clear {
        config = config.with_clear_screen(false);
    }

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config);
    let outcome = session.run()?;
    info!(%outcome, "Session finished");
    Ok(())
}
