use std::fmt::{Display, Formatter};

use generic_array::typenum::{Unsigned, U3};
use tracing::{debug, info};

use crate::game::{
    player_pool, rules, BoardCell, FinishedState, Game, GameError, GameResult, GameState, Grid,
    GridIndex, PlayerPosition, PlayerQueue,
};

pub type BoardSize = U3;
pub const BOARD_SIZE: usize = BoardSize::USIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

pub type Cell = BoardCell<Mark>;
pub type Board = Grid<Cell, BoardSize, BoardSize>;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    id: PlayerPosition,
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new(id: PlayerPosition, name: impl Into<String>, mark: Mark) -> Self {
        Self {
            id,
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl player_pool::Player for Player {
    type Id = PlayerPosition;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

/// An accepted move, as kept in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub player: PlayerPosition,
    pub index: GridIndex,
    pub mark: Mark,
}

#[derive(Clone, Debug)]
pub struct TicTacToe {
    players: PlayerQueue<Player>,
    state: GameState,
    field: Board,
    history: Vec<Move>,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            players: PlayerQueue::new([
                Player::new(Self::PLAYER_ONE, "Player 1", Mark::X),
                Player::new(Self::PLAYER_TWO, "Player 2", Mark::O),
            ]),
            state: GameState::Turn(Self::PLAYER_ONE),
            field: Board::default(),
            history: Vec::new(),
        }
    }
}

impl Game for TicTacToe {
    type TurnData = GridIndex;
    type Player = Player;
    type Board = Board;

    fn update(&mut self, id: PlayerPosition, data: Self::TurnData) -> GameResult<GameState> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        let current = self.get_current_player()?;
        if id != current.id {
            return Err(GameError::not_your_turn(current.id, id));
        }

        let mark = current.mark;
        self.field.place(data, mark)?;
        self.history.push(Move {
            player: id,
            index: data,
            mark,
        });
        debug!(player = id, index = %data, %mark, "move accepted");

        self.update_state()
    }

    fn board(&self) -> &Self::Board {
        &self.field
    }

    fn players(&self) -> &PlayerQueue<Self::Player> {
        &self.players
    }

    fn players_mut(&mut self) -> &mut PlayerQueue<Self::Player> {
        &mut self.players
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}

impl TicTacToe {
    pub const PLAYER_ONE: PlayerPosition = 0;
    pub const PLAYER_TWO: PlayerPosition = 1;

    /// Creates a game where `player_one` moves first.
    pub fn new(player_one: Player, player_two: Player) -> GameResult<Self> {
        if player_one.id == player_two.id {
            return Err(GameError::DuplicatePlayerId);
        }
        if player_one.mark == player_two.mark {
            return Err(GameError::DuplicateMark);
        }
        let first = player_one.id;
        Ok(Self {
            players: PlayerQueue::new([player_one, player_two]),
            state: GameState::Turn(first),
            field: Board::default(),
            history: Vec::new(),
        })
    }

    /// Hands the opening move to the player with `id`. Only allowed before the first move.
    pub fn with_first_player(mut self, id: PlayerPosition) -> GameResult<Self> {
        if !self.history.is_empty() {
            return Err(GameError::GameAlreadyStarted);
        }
        self.players
            .rotate_to(id)
            .ok_or(GameError::PlayerNotFound)?;
        self.state = GameState::Turn(id);
        Ok(self)
    }

    pub fn player(&self, id: PlayerPosition) -> GameResult<&Player> {
        self.players.find(id).ok_or(GameError::PlayerNotFound)
    }

    pub fn get_player_by_mark(&self, mark: Mark) -> GameResult<&Player> {
        self.players
            .find_if(|player| player.mark == mark)
            .ok_or(GameError::PlayerNotFound)
    }

    /// The player who has to move now, [`None`] once the game is finished.
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            GameState::Turn(id) => self.players.find(id),
            GameState::Finished(_) => None,
        }
    }

    /// The player waiting for their turn.
    pub fn opponent(&self) -> GameResult<&Player> {
        self.get_enemy_player()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            GameState::Finished(FinishedState::Win(id)) => self.players.find(id),
            _ => None,
        }
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    fn update_state(&mut self) -> GameResult<GameState> {
        if let Some((line, mark)) = rules::winning_line(&self.field) {
            let winner = self.get_player_by_mark(mark)?.id;
            info!(winner, %line, moves = self.history.len(), "game won");
            return Ok(self.set_winner(winner));
        }

        if rules::is_draw(&self.field) {
            info!(moves = self.history.len(), "game drawn");
            return Ok(self.set_draw());
        }

        self.switch_player()
    }
}
