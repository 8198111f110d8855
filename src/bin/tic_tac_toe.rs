extern crate tic_tac_toe;

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tic_tac_toe::cli::Args;
use tic_tac_toe::game_loop::{GameLoop, LoopError};
use tic_tac_toe::session::Session;

fn init_tracing(default_filter: &str) {
    // logs go to stderr, stdout belongs to the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level);
    info!(?args, "starting");

    let game_loop = GameLoop::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(
        game_loop,
        args.move_sources(),
        args.session_config(),
        args.rng(0),
    );

    match session.run() {
        Ok(scoreboard) => {
            info!(%scoreboard, "session finished");
            Ok(())
        }
        Err(LoopError::Aborted { player }) => {
            println!("\nGame aborted by {}", player);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
