//! Plays a fixed game move by move and prints the board after each one.
//!
//! Registered as a cargo example from `demos/` in `Cargo.toml`, so it runs with
//! `cargo run --example scripted_game`.

extern crate tic_tac_toe;

use tic_tac_toe::game::tic_tac_toe::TicTacToe;
use tic_tac_toe::game::{Game, GameResult, GridIndex};

fn main() -> GameResult<()> {
    let player1 = TicTacToe::PLAYER_ONE;
    let player2 = TicTacToe::PLAYER_TWO;
    let mut ttt = TicTacToe::default();

    let turns = [
        (player1, GridIndex::new(1, 1)),
        (player2, GridIndex::new(1, 2)),
        (player1, GridIndex::new(2, 2)),
        (player2, GridIndex::new(0, 0)),
        (player1, GridIndex::new(2, 1)),
        (player2, GridIndex::new(0, 1)),
        (player1, GridIndex::new(2, 0)),
    ];
    for (player, index) in turns {
        let state = ttt.update(player, index)?;
        println!("{}\n{:?}\n", ttt.board(), state);
    }
    Ok(())
}
