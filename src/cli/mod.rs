//! Terminal front end.
//!
//! Reads one command per line, turns it into a typed `Action` and hands it
//! to the rules engine. Rendering only reads the session.

pub mod command;
pub mod render;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::debug;

use crate::core::{Session, SessionConfig, DEFAULT_CUSTOM_AMOUNT, DEFAULT_STARTING_LIFE, MAX_TABLE_SIZE};
use crate::rules::{apply_action, Applied};

pub use command::{Command, ParseError, HELP};

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "lifecounter")]
#[command(about = "Track life totals for a tabletop game")]
#[command(version)]
pub struct Args {
    /// Players at the start of each game (1-8)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_TABLE_SIZE as i64))]
    pub players: Option<u8>,

    /// Fixed two-player table; game over does not lock the buttons
    #[arg(long, conflicts_with = "players")]
    pub duel: bool,

    /// Starting life
    #[arg(short, long, default_value_t = DEFAULT_STARTING_LIFE, allow_negative_numbers = true)]
    pub life: i64,

    /// Starting custom amount
    #[arg(short, long, default_value_t = DEFAULT_CUSTOM_AMOUNT, allow_negative_numbers = true)]
    pub amount: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Session configuration described by these arguments.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        let base = if self.duel {
            SessionConfig::duel()
        } else {
            let config = SessionConfig::multiplayer();
            match self.players {
                Some(count) => config.with_default_players(count as usize),
                None => config,
            }
        };
        base.with_starting_life(self.life).with_custom_amount(self.amount)
    }

    /// Log level for the subscriber filter.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Run the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> io::Result<()> {
    write!(output, "{}", render::board(session))?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut output)?;
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::History) => write!(output, "{}", render::history(session))?,
            Ok(Command::Status { json: false }) => write!(output, "{}", render::board(session))?,
            Ok(Command::Status { json: true }) => {
                let snapshot = serde_json::to_string_pretty(&*session).map_err(io::Error::other)?;
                writeln!(output, "{}", snapshot)?;
            }
            Ok(Command::Act(action)) => match apply_action(session, action) {
                Ok(applied) => {
                    debug!(?applied, "applied");
                    if let Applied::LifeChanged(event) = &applied {
                        writeln!(output, "{}", event)?;
                    }
                    write!(output, "{}", render::board(session))?;
                }
                Err(err) => writeln!(output, "rejected: {}", err)?,
            },
            Err(err) => writeln!(output, "error: {}", err)?,
        }

        prompt(&mut output)?;
    }

    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
