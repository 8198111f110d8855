use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

use rand::Rng;
use tracing::info;

use crate::game::tic_tac_toe::{Mark, Player, TicTacToe};
use crate::game::{FinishedState, GameResult, PlayerPosition};
use crate::game_loop::{GameLoop, LoopError, MoveSource};

/// Who opens a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstPlayer {
    #[default]
    PlayerOne,
    PlayerTwo,
    Random,
}

impl FirstPlayer {
    pub fn choose<R: Rng + ?Sized>(self, rng: &mut R) -> PlayerPosition {
        match self {
            FirstPlayer::PlayerOne => TicTacToe::PLAYER_ONE,
            FirstPlayer::PlayerTwo => TicTacToe::PLAYER_TWO,
            FirstPlayer::Random if rng.gen_bool(0.5) => TicTacToe::PLAYER_ONE,
            FirstPlayer::Random => TicTacToe::PLAYER_TWO,
        }
    }
}

fn other_player(id: PlayerPosition) -> PlayerPosition {
    if id == TicTacToe::PLAYER_ONE {
        TicTacToe::PLAYER_TWO
    } else {
        TicTacToe::PLAYER_ONE
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Player one plays X, player two plays O.
    pub player_names: [String; 2],
    pub first: FirstPlayer,
    pub rounds: u32,
    /// Swap the opening player after every round instead of choosing again.
    pub alternate_first: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            first: FirstPlayer::default(),
            rounds: 1,
            alternate_first: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    names: [String; 2],
    wins: [u32; 2],
    draws: u32,
}

impl Scoreboard {
    pub fn new(names: [String; 2]) -> Self {
        Self {
            names,
            ..Default::default()
        }
    }

    pub fn record(&mut self, finished: FinishedState) {
        match finished {
            FinishedState::Win(id) => {
                if let Some(wins) = self.wins.get_mut(usize::from(id)) {
                    *wins += 1;
                }
            }
            FinishedState::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, id: PlayerPosition) -> u32 {
        self.wins.get(usize::from(id)).copied().unwrap_or_default()
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games(&self) -> u32 {
        self.wins.iter().sum::<u32>() + self.draws
    }
}

impl Display for Scoreboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, {}: {}, draws: {}",
            self.names[0], self.wins[0], self.names[1], self.wins[1], self.draws
        )
    }
}

/// A series of rounds between the same two participants.
pub struct Session<I, W, R> {
    game_loop: GameLoop<I, W>,
    sources: [Box<dyn MoveSource>; 2],
    config: SessionConfig,
    rng: R,
}

impl<I: BufRead, W: Write, R: Rng> Session<I, W, R> {
    pub fn new(
        game_loop: GameLoop<I, W>,
        sources: [Box<dyn MoveSource>; 2],
        config: SessionConfig,
        rng: R,
    ) -> Self {
        Self {
            game_loop,
            sources,
            config,
            rng,
        }
    }

    pub fn into_game_loop(self) -> GameLoop<I, W> {
        self.game_loop
    }

    fn new_game(&self, first: PlayerPosition) -> GameResult<TicTacToe> {
        let [one, two] = self.config.player_names.clone();
        TicTacToe::new(
            Player::new(TicTacToe::PLAYER_ONE, one, Mark::X),
            Player::new(TicTacToe::PLAYER_TWO, two, Mark::O),
        )?
        .with_first_player(first)
    }

    /// Plays all rounds. An aborted round ends the session.
    pub fn run(&mut self) -> Result<Scoreboard, LoopError> {
        let rounds = self.config.rounds;
        let mut scoreboard = Scoreboard::new(self.config.player_names.clone());
        let mut previous_first = None;

        for round in 1..=rounds {
            let first = match previous_first {
                Some(previous) if self.config.alternate_first => other_player(previous),
                _ => self.config.first.choose(&mut self.rng),
            };
            previous_first = Some(first);

            let mut game = self.new_game(first)?;
            if rounds > 1 {
                writeln!(self.game_loop.out(), "Round {} of {}", round, rounds)?;
            }
            let finished = self.game_loop.run(&mut game, &mut self.sources)?;
            scoreboard.record(finished);
            info!(round, first, ?finished, "round finished");
        }

        if rounds > 1 {
            writeln!(self.game_loop.out(), "Final score: {}", scoreboard)?;
        }
        Ok(scoreboard)
    }
}
