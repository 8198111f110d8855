pub mod cli;
pub mod game;
pub mod game_loop;
pub mod session;
