pub mod bot;
pub mod rules;
pub mod tic_tac_toe;

mod error;
mod grid;
mod player_pool;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

pub use error::{GameError, InvalidMoveReason};
pub use grid::{Grid, GridIndex, WithGridIndex};
pub use player_pool::{Player, PlayerQueue};

pub type GameResult<T> = Result<T, GameError>;
pub type PlayerPosition = u8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, " {} ", val),
            None => f.write_str("   "),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishedState {
    Win(PlayerPosition),
    Draw,
}

/// `Turn` is the only state that accepts moves; `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Turn(PlayerPosition),
    Finished(FinishedState),
}

pub trait Game: Sized {
    type TurnData;
    type Player: Player<Id = PlayerPosition>;
    type Board;

    fn update(&mut self, id: PlayerPosition, data: Self::TurnData) -> GameResult<GameState>;

    fn board(&self) -> &Self::Board;

    fn players(&self) -> &PlayerQueue<Self::Player>;
    fn players_mut(&mut self) -> &mut PlayerQueue<Self::Player>;

    fn state(&self) -> GameState;
    fn set_state(&mut self, state: GameState);

    fn is_finished(&self) -> bool {
        matches!(self.state(), GameState::Finished(_))
    }

    fn set_draw(&mut self) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Draw));
        self.state()
    }

    fn set_winner(&mut self, id: PlayerPosition) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Win(id)));
        self.state()
    }

    fn get_current_player(&self) -> GameResult<&Self::Player> {
        self.players()
            .get_current()
            .ok_or(GameError::PlayerPoolCorrupted)
    }

    fn get_enemy_player(&self) -> GameResult<&Self::Player> {
        let current_id = self.get_current_player()?.id();
        self.players()
            .find_if(|p| p.id() != current_id)
            .ok_or(GameError::PlayerPoolCorrupted)
    }

    fn switch_player(&mut self) -> GameResult<GameState> {
        let next_player = self
            .players_mut()
            .next()
            .ok_or(GameError::PlayerPoolCorrupted)?
            .id();
        self.set_state(GameState::Turn(next_player));
        Ok(self.state())
    }
}
