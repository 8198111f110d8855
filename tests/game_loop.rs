extern crate tic_tac_toe;

use std::io::Cursor;

use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tic_tac_toe::game::bot::MoveStrategy;
use tic_tac_toe::game::rules;
use tic_tac_toe::game::tic_tac_toe::{Mark, TicTacToe};
use tic_tac_toe::game::{FinishedState, Game, GameState, GridIndex};
use tic_tac_toe::game_loop::{Bot, GameLoop, Human, LoopError, MoveSource};
use tic_tac_toe::session::{FirstPlayer, Session, SessionConfig};

type Output = Vec<u8>;

fn play(
    script: &str,
    sources: &mut [Box<dyn MoveSource>; 2],
) -> (Result<FinishedState, LoopError>, TicTacToe, String) {
    let mut game_loop = GameLoop::new(Cursor::new(script.to_string()), Output::new());
    let mut game = TicTacToe::default();
    let result = game_loop.run(&mut game, sources);
    let (_, out) = game_loop.into_inner();
    (result, game, String::from_utf8_lossy(&out).into_owned())
}

fn tactical(seed: u64) -> Box<dyn MoveSource> {
    Box::new(Bot::new(
        MoveStrategy::Tactical,
        ChaCha8Rng::seed_from_u64(seed),
    ))
}

fn random(seed: u64) -> Box<dyn MoveSource> {
    Box::new(Bot::new(MoveStrategy::Random, ChaCha8Rng::seed_from_u64(seed)))
}

#[test]
fn test_humans_top_row_win() {
    let mut sources: [Box<dyn MoveSource>; 2] = [Box::new(Human), Box::new(Human)];
    let (result, game, out) = play("0 0\n1 1\n0 1\n1 0\n0 2\n", &mut sources);

    assert_eq!(result.unwrap(), FinishedState::Win(TicTacToe::PLAYER_ONE));
    assert_eq!(rules::winner(game.board()), Some(Mark::X));
    assert_eq!(game.move_count(), 5);
    assert!(out.ends_with("Player 1 (X) wins!\n"));
}

#[test]
fn test_humans_draw_with_keypad_input() {
    let mut sources: [Box<dyn MoveSource>; 2] = [Box::new(Human), Box::new(Human)];
    // X O X / X O O / O X X
    let (result, game, out) = play("1\n2\n3\n5\n4\n6\n8\n7\n9\n", &mut sources);

    assert_eq!(result.unwrap(), FinishedState::Draw);
    assert!(game.board().is_full());
    assert!(rules::is_draw(game.board()));
    assert!(out.ends_with("It's a draw!\n"));
}

#[test]
fn test_human_against_tactical_bot() {
    let mut sources = [Box::new(Human) as Box<dyn MoveSource>, tactical(0)];
    let (result, game, out) = play("0 0\n2 2\n2 0\n1 0\n", &mut sources);

    assert_eq!(result.unwrap(), FinishedState::Win(TicTacToe::PLAYER_ONE));
    assert!(out.contains("Player 2 (O) plays (1, 1)"));
    assert!(out.contains("Player 2 (O) plays (0, 2)"));
    // blocks the bottom row before the left column
    assert!(out.contains("Player 2 (O) plays (2, 1)"));
    assert_eq!(out.matches("your move").count(), 4);
    assert_eq!(game.winner().map(|p| p.name()), Some("Player 1"));
}

#[test]
fn test_end_of_input_aborts() {
    let mut sources: [Box<dyn MoveSource>; 2] = [Box::new(Human), Box::new(Human)];
    let (result, game, _) = play("1 1\n", &mut sources);

    match result {
        Err(LoopError::Aborted { player }) => assert_eq!(player, "Player 2"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(game.state(), GameState::Turn(TicTacToe::PLAYER_TWO));
}

#[test]
fn test_tactical_session_always_draws() {
    let config = SessionConfig {
        first: FirstPlayer::PlayerOne,
        rounds: 2,
        alternate_first: true,
        ..Default::default()
    };
    let game_loop = GameLoop::new(Cursor::new(String::new()), Output::new());
    let mut session = Session::new(
        game_loop,
        [tactical(1), tactical(2)],
        config,
        ChaCha8Rng::seed_from_u64(0),
    );

    let scoreboard = session.run().unwrap();
    assert_eq!(scoreboard.draws(), 2);
    assert_eq!(scoreboard.games(), 2);

    let (_, out) = session.into_game_loop().into_inner();
    let out = String::from_utf8_lossy(&out);
    assert!(out.contains("Round 1 of 2"));
    assert!(out.contains("Round 2 of 2"));
    assert!(out.ends_with("Final score: Player 1: 0, Player 2: 0, draws: 2\n"));
}

#[test]
fn test_seeded_random_session_is_reproducible() {
    let run = |seed: u64| {
        let config = SessionConfig {
            first: FirstPlayer::Random,
            rounds: 5,
            ..Default::default()
        };
        let game_loop = GameLoop::new(Cursor::new(String::new()), Output::new());
        let mut session = Session::new(
            game_loop,
            [random(seed), random(seed + 1)],
            config,
            ChaCha8Rng::seed_from_u64(seed),
        );
        let scoreboard = session.run().unwrap();
        let (_, out) = session.into_game_loop().into_inner();
        (scoreboard, out)
    };

    let (scoreboard, out) = run(7);
    assert_eq!(scoreboard.games(), 5);
    assert_eq!(
        scoreboard.wins(TicTacToe::PLAYER_ONE)
            + scoreboard.wins(TicTacToe::PLAYER_TWO)
            + scoreboard.draws(),
        5
    );
    assert_eq!(run(7), (scoreboard, out));
}

#[test]
fn test_random_games_keep_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..200 {
        let mut game = TicTacToe::default();
        while let GameState::Turn(id) = game.state() {
            // any cell, occupied ones included
            let index = (0..3)
                .flat_map(|row| (0..3).map(move |col| GridIndex::new(row, col)))
                .choose(&mut rng)
                .unwrap();
            let board = game.board().clone();
            let accepted = game.update(id, index).is_ok();

            if accepted {
                assert!(game.board().get(index).unwrap().is_some());
                assert!(board.get(index).unwrap().is_none());
            } else {
                assert_eq!(game.board(), &board);
                assert_eq!(game.state(), GameState::Turn(id));
            }
            assert_eq!(game.board().occupied_count(), game.move_count());
            if let GameState::Turn(next) = game.state() {
                assert_eq!(next != id, accepted);
            }
        }

        match game.state() {
            GameState::Finished(FinishedState::Win(id)) => {
                let mark = game.player(id).unwrap().mark();
                assert_eq!(rules::winner(game.board()), Some(mark));
            }
            GameState::Finished(FinishedState::Draw) => assert!(rules::is_draw(game.board())),
            GameState::Turn(_) => unreachable!(),
        }
        assert!(game.update(TicTacToe::PLAYER_ONE, GridIndex::new(0, 0)).is_err());
    }
}
