use crate::game::tic_tac_toe::BOARD_SIZE;
use crate::game::GridIndex;

use super::PlayerAction;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InputError {
    #[error("no move entered")]
    Empty,
    #[error("input is not valid UTF-8")]
    InvalidEncoding,
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("keypad index must be 1-9, found {0}")]
    InvalidKeypadIndex(usize),
    #[error("expected `row col` or a keypad index 1-9, found {0} values")]
    WrongArity(usize),
}

fn parse_number(token: &str) -> Result<usize, InputError> {
    token
        .parse()
        .map_err(|_| InputError::InvalidNumber(token.to_string()))
}

/// Parses one line typed by a human player.
///
/// Accepted forms:
/// - `row col`: zero-based coordinates separated by whitespace or a comma, e.g. `1 2` or `1,2`
/// - `n`: keypad index from 1 to 9 in row-major order
/// - `q` / `quit`: give up
///
/// Coordinates are not range-checked here, the board rejects them as an invalid move.
pub fn parse_action(line: &str) -> Result<PlayerAction, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(PlayerAction::Quit);
    }

    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();
    match tokens.as_slice() {
        [] => Err(InputError::Empty),
        [keypad] => {
            let n = parse_number(keypad)?;
            if !(1..=BOARD_SIZE * BOARD_SIZE).contains(&n) {
                return Err(InputError::InvalidKeypadIndex(n));
            }
            let offset = n - 1;
            Ok(PlayerAction::Place(GridIndex::new(
                offset / BOARD_SIZE,
                offset % BOARD_SIZE,
            )))
        }
        [row, col] => Ok(PlayerAction::Place(GridIndex::new(
            parse_number(row)?,
            parse_number(col)?,
        ))),
        other => Err(InputError::WrongArity(other.len())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn place(row: usize, col: usize) -> Result<PlayerAction, InputError> {
        Ok(PlayerAction::Place(GridIndex::new(row, col)))
    }

    #[test]
    fn test_row_col() {
        assert_eq!(parse_action("0 2"), place(0, 2));
        assert_eq!(parse_action("  1,1 \n"), place(1, 1));
        assert_eq!(parse_action("2, 0"), place(2, 0));
        // range is checked by the board
        assert_eq!(parse_action("5 7"), place(5, 7));
    }

    #[test]
    fn test_keypad() {
        assert_eq!(parse_action("1"), place(0, 0));
        assert_eq!(parse_action("5"), place(1, 1));
        assert_eq!(parse_action("6\n"), place(1, 2));
        assert_eq!(parse_action("9"), place(2, 2));
        assert_eq!(parse_action("0"), Err(InputError::InvalidKeypadIndex(0)));
        assert_eq!(parse_action("10"), Err(InputError::InvalidKeypadIndex(10)));
    }

    #[test]
    fn test_quit() {
        assert_eq!(parse_action("q"), Ok(PlayerAction::Quit));
        assert_eq!(parse_action("QUIT\n"), Ok(PlayerAction::Quit));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_action("\n"), Err(InputError::Empty));
        assert_eq!(
            parse_action("a 1"),
            Err(InputError::InvalidNumber("a".to_string()))
        );
        assert_eq!(
            parse_action("-1 0"),
            Err(InputError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(parse_action("1 2 3"), Err(InputError::WrongArity(3)));
    }
}
