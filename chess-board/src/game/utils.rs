use shakmaty::{Chess, fen::Fen, CastlingMode, EnPassantMode, File, Rank, Square};
use crate::error::BoardError;

/// Create a board from a FEN string
pub fn new_board_from_fen(fen: &str) -> Result<Chess, BoardError> {
    let fen = Fen::from_ascii(fen.as_bytes())?;
    let position = fen.into_position::<Chess>(CastlingMode::Standard)?;
    Ok(position)
}

pub fn new_board_from_fen_opt(fen: Option<&str>) -> Result<Chess, BoardError> {
    match fen {
        Some(fen) => new_board_from_fen(fen),
        _ => Ok(Chess::default()),
    }
}

pub fn board_to_fen(board: &Chess) -> String {
    Fen::from_position(board.clone(), EnPassantMode::Legal).to_string()
}

/// Parse a square name such as `e4`
pub fn parse_square(name: &str) -> Result<Square, BoardError> {
    Ok(name.parse::<Square>()?)
}

/// Convert row/col of the board grid (row 0 = rank 8, col 0 = file a) to a square
pub fn grid_square(row: usize, col: usize) -> Square {
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32);
    Square::from_coords(file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_corners_map_to_board_corners() {
        assert_eq!(grid_square(0, 0), Square::A8);
        assert_eq!(grid_square(7, 0), Square::A1);
        assert_eq!(grid_square(7, 7), Square::H1);
        assert_eq!(grid_square(0, 4), Square::E8);
    }

    #[test]
    fn missing_fen_gives_initial_position() {
        let board = new_board_from_fen_opt(None).unwrap();
        assert_eq!(
            board_to_fen(&board),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(new_board_from_fen("not a fen"), Err(BoardError::FenParseError(_))));
        // two white kings
        assert!(matches!(
            new_board_from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(BoardError::PositionError(_))
        ));
        assert!(matches!(parse_square("z9"), Err(BoardError::SquareParseError(_))));
        assert_eq!(parse_square("e2").unwrap(), Square::E2);
    }
}
