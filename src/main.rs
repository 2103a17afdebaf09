//! lifecounter - track life totals from the terminal.

use std::io;

use clap::Parser;
use tracing::info;

use life_counter::cli::{self, Args};
use life_counter::Session;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(format!("life_counter={},lifecounter={}", args.log_level(), args.log_level()))
        .with_writer(io::stderr)
        .init();

    let config = args.session_config();
    info!(
        players = config.default_players,
        max = config.max_players,
        life = config.starting_life,
        "starting session"
    );

    let mut session = Session::new(config);
    let stdin = io::stdin();
    cli::run(&mut session, stdin.lock(), io::stdout().lock())?;

    info!(events = session.history().len(), "session closed");
    Ok(())
}
