//! Command-line configuration. Every option can also come from the environment
//! (or a `.env` file loaded at start-up).

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::game::bot::MoveStrategy;
use crate::game_loop::{Bot, Human, MoveSource};
use crate::session::{FirstPlayer, SessionConfig};

/// Who controls the second player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// Another person at the same terminal
    Human,
    /// Computer picking random cells
    Random,
    /// Computer that wins when it can and blocks when it must
    Tactical,
}

/// Who makes the opening move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Starter {
    One,
    Two,
    Random,
}

impl From<Starter> for FirstPlayer {
    fn from(value: Starter) -> Self {
        match value {
            Starter::One => FirstPlayer::PlayerOne,
            Starter::Two => FirstPlayer::PlayerTwo,
            Starter::Random => FirstPlayer::Random,
        }
    }
}

/// Tic-tac-toe for two players in the terminal
#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe", version)]
pub struct Args {
    /// Name of the first player (plays X)
    #[arg(long, env = "TTT_PLAYER_ONE", default_value = "Player 1")]
    pub player_one: String,

    /// Name of the second player (plays O)
    #[arg(long, env = "TTT_PLAYER_TWO", default_value = "Player 2")]
    pub player_two: String,

    /// Who controls the second player
    #[arg(long, value_enum, env = "TTT_OPPONENT", default_value_t = Opponent::Human)]
    pub opponent: Opponent,

    /// Who makes the opening move
    #[arg(long, value_enum, env = "TTT_FIRST", default_value_t = Starter::Random)]
    pub first: Starter,

    /// Seed for every random choice, for reproducible games
    #[arg(long, env = "TTT_SEED")]
    pub seed: Option<u64>,

    /// Number of rounds to play
    #[arg(
        long,
        env = "TTT_ROUNDS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub rounds: u32,

    /// Swap the opening player after every round
    #[arg(long, env = "TTT_ALTERNATE_FIRST")]
    pub alternate_first: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "TTT_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            player_names: [self.player_one.clone(), self.player_two.clone()],
            first: self.first.into(),
            rounds: self.rounds,
            alternate_first: self.alternate_first,
        }
    }

    /// Random generator for one consumer. Seeded runs give every `stream` its own sequence.
    pub fn rng(&self, stream: u64) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(stream);
                rng
            }
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Player one is always a human at the terminal.
    pub fn move_sources(&self) -> [Box<dyn MoveSource>; 2] {
        let opponent: Box<dyn MoveSource> = match self.opponent {
            Opponent::Human => Box::new(Human),
            Opponent::Random => Box::new(Bot::new(MoveStrategy::Random, self.rng(1))),
            Opponent::Tactical => Box::new(Bot::new(MoveStrategy::Tactical, self.rng(1))),
        };
        [Box::new(Human), opponent]
    }
}
