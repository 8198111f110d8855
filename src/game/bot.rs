use rand::seq::IteratorRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::game::rules::Line;
use crate::game::tic_tac_toe::{Board, Mark, BOARD_SIZE};
use crate::game::GridIndex;

/// Centre first, then the corners.
const PREFERRED_CELLS: [(usize, usize); 5] = [(1, 1), (0, 0), (0, 2), (2, 0), (2, 2)];

fn get_random_position<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<GridIndex> {
    board.empty_cells().choose(rng)
}

/// Finds the empty cell that would complete a line of `mark`.
fn completing_position(board: &Board, mark: Mark) -> Option<GridIndex> {
    Line::all(BOARD_SIZE).find_map(|line| {
        let cells = line.cells(board);
        let own = cells.iter().filter(|(_, cell)| cell.0 == Some(mark)).count();
        let empty: SmallVec<[GridIndex; 3]> = cells
            .iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| *index)
            .collect();
        match empty.as_slice() {
            [index] if own + 1 == cells.len() => Some(*index),
            _ => None,
        }
    })
}

fn preferred_position(board: &Board) -> Option<GridIndex> {
    PREFERRED_CELLS
        .into_iter()
        .map(GridIndex::from)
        .find(|index| board.get(*index).is_some_and(|cell| cell.is_none()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Any empty cell.
    Random,
    /// Win if possible, block the opponent otherwise, then centre, corners and the rest.
    Tactical,
}

impl MoveStrategy {
    /// Picks a move for `mark`. Returns [`None`] only when the board is full.
    pub fn get_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut R,
    ) -> Option<GridIndex> {
        match self {
            MoveStrategy::Random => get_random_position(board, rng),
            MoveStrategy::Tactical => completing_position(board, mark)
                .or_else(|| completing_position(board, mark.opponent()))
                .or_else(|| preferred_position(board))
                .or_else(|| get_random_position(board, rng)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::default();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                board.place((row, col).into(), mark).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_random_picks_empty_cell() {
        let board = board_from(["XOX", "OXO", "O.X"]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                MoveStrategy::Random.get_move(&board, Mark::O, &mut rng),
                Some(GridIndex::new(2, 1))
            );
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let board = Board::default();
        let moves = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..5)
                .map(|_| MoveStrategy::Random.get_move(&board, Mark::X, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(moves(42), moves(42));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(MoveStrategy::Random.get_move(&board, Mark::X, &mut rng), None);
        assert_eq!(MoveStrategy::Tactical.get_move(&board, Mark::X, &mut rng), None);
    }

    #[test]
    fn test_tactical_takes_win() {
        // both players could complete a line, winning comes first
        let board = board_from(["XX.", "OO.", "..."]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            MoveStrategy::Tactical.get_move(&board, Mark::O, &mut rng),
            Some(GridIndex::new(1, 2))
        );
    }

    #[test]
    fn test_tactical_blocks() {
        let board = board_from(["X..", "X..", "..O"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            MoveStrategy::Tactical.get_move(&board, Mark::O, &mut rng),
            Some(GridIndex::new(2, 0))
        );
    }

    #[test]
    fn test_tactical_takes_corner_without_threats() {
        let board = board_from(["X..", ".X.", "..O"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            MoveStrategy::Tactical.get_move(&board, Mark::O, &mut rng),
            Some(GridIndex::new(0, 2))
        );
    }

    #[test]
    fn test_tactical_prefers_centre() {
        let board = board_from(["X..", "...", "..."]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            MoveStrategy::Tactical.get_move(&board, Mark::O, &mut rng),
            Some(GridIndex::new(1, 1))
        );
    }
}
