pub mod input;

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, warn};

use crate::game::bot::MoveStrategy;
use crate::game::tic_tac_toe::TicTacToe;
use crate::game::{FinishedState, Game, GameError, GameState, GridIndex, Player as _};

pub use input::{parse_action, InputError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Place(GridIndex),
    Quit,
}

#[derive(thiserror::Error, Debug)]
pub enum LoopError {
    #[error("game aborted by {player}")]
    Aborted { player: String },
    #[error(transparent)]
    InvalidInput(#[from] InputError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Where a participant's moves come from.
pub trait MoveSource {
    /// Decides the next action for the current player of `game`.
    /// Interactive sources read it from `input`.
    fn next_action(
        &mut self,
        game: &TicTacToe,
        input: &mut dyn BufRead,
    ) -> Result<PlayerAction, LoopError>;

    /// Interactive sources get a prompt before each move.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// A person typing one move per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct Human;

impl MoveSource for Human {
    fn next_action(
        &mut self,
        _game: &TicTacToe,
        input: &mut dyn BufRead,
    ) -> Result<PlayerAction, LoopError> {
        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            // end of input, nobody is left to answer
            return Ok(PlayerAction::Quit);
        }
        // the whole line is consumed, so a bad one can simply be retyped
        let line = String::from_utf8(line).map_err(|_| InputError::InvalidEncoding)?;
        Ok(parse_action(&line)?)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

pub struct Bot<R> {
    strategy: MoveStrategy,
    rng: R,
}

impl<R: Rng> Bot<R> {
    pub fn new(strategy: MoveStrategy, rng: R) -> Self {
        Self { strategy, rng }
    }
}

impl<R: Rng> MoveSource for Bot<R> {
    fn next_action(
        &mut self,
        game: &TicTacToe,
        _input: &mut dyn BufRead,
    ) -> Result<PlayerAction, LoopError> {
        let player = game.current_player().ok_or(GameError::GameIsFinished)?;
        let index = self
            .strategy
            .get_move(game.board(), player.mark(), &mut self.rng)
            .ok_or(GameError::GameIsFinished)?;
        debug!(strategy = ?self.strategy, %index, "bot picked a move");
        Ok(PlayerAction::Place(index))
    }
}

/// Drives one game at a time: renders the board, asks the current player's source for a move
/// and re-prompts the same player until the move is accepted.
pub struct GameLoop<I, W> {
    input: I,
    out: W,
}

impl<I: BufRead, W: Write> GameLoop<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> (I, W) {
        (self.input, self.out)
    }

    /// Plays `game` until it is finished.
    /// `sources` follow the order of `game.players()`.
    pub fn run(
        &mut self,
        game: &mut TicTacToe,
        sources: &mut [Box<dyn MoveSource>; 2],
    ) -> Result<FinishedState, LoopError> {
        writeln!(self.out, "{}", game.board())?;
        loop {
            let id = match game.state() {
                GameState::Turn(id) => id,
                GameState::Finished(finished) => {
                    self.announce(game, finished)?;
                    return Ok(finished);
                }
            };
            let player = game.player(id)?.clone();
            let slot = game
                .players()
                .as_slice()
                .iter()
                .position(|p| p.id() == id)
                .ok_or(GameError::PlayerNotFound)?;
            let source = sources
                .get_mut(slot)
                .ok_or(GameError::PlayerPoolCorrupted)?;

            if source.is_interactive() {
                write!(self.out, "{}, your move (`row col` or 1-9): ", player)?;
                self.out.flush()?;
            }
            let index = match source.next_action(game, &mut self.input) {
                Ok(PlayerAction::Place(index)) => index,
                Ok(PlayerAction::Quit) => {
                    return Err(LoopError::Aborted {
                        player: player.name().to_string(),
                    })
                }
                Err(LoopError::InvalidInput(err)) => {
                    warn!(player = id, %err, "unreadable move");
                    writeln!(self.out, "{}, try again", err)?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            match game.update(id, index) {
                Ok(_) => {
                    if !source.is_interactive() {
                        writeln!(self.out, "{} plays {}", player, index)?;
                    }
                    writeln!(self.out, "{}", game.board())?;
                }
                Err(err) if err.is_invalid_move() => {
                    warn!(player = id, %err, "move rejected");
                    writeln!(self.out, "{}, try again", err)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn announce(&mut self, game: &TicTacToe, finished: FinishedState) -> Result<(), LoopError> {
        match finished {
            FinishedState::Win(id) => writeln!(self.out, "{} wins!", game.player(id)?)?,
            FinishedState::Draw => writeln!(self.out, "It's a draw!")?,
        }
        Ok(())
    }
}
