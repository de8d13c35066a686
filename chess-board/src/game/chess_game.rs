use shakmaty::{Bitboard, CastlingMode, Chess, Color, Move, Piece, Position, Role, Square, uci::UciMove};
use crate::error::BoardError;
use crate::game::state::{BoardGrid, GameState};
use crate::game::utils;

/// Game state backed by a shakmaty position
#[derive(Debug, Clone, Default)]
pub struct ChessGame {
    board: Chess,
}

impl ChessGame {
    /// Start from the initial position
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a FEN string
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let board = utils::new_board_from_fen(fen)?;
        Ok(Self { board })
    }

    pub fn from_fen_opt(fen: Option<&str>) -> Result<Self, BoardError> {
        let board = utils::new_board_from_fen_opt(fen)?;
        Ok(Self { board })
    }

    pub fn position(&self) -> &Chess {
        &self.board
    }

    /// Legal moves leaving `from`, paired with their destination as the board
    /// surface sees it. Castling lands on the king's target square.
    fn moves_from(&self, from: Square) -> impl Iterator<Item = (Move, Square)> {
        self.board
            .legal_moves()
            .into_iter()
            .filter_map(move |m| match m.to_uci(CastlingMode::Standard) {
                UciMove::Normal { from: source, to, .. } if source == from => Some((m, to)),
                _ => None,
            })
    }
}

impl GameState for ChessGame {
    fn occupant(&self, square: Square) -> Option<Piece> {
        self.board.board().piece_at(square)
    }

    fn side_to_move(&self) -> Color {
        self.board.turn()
    }

    fn legal_destinations(&self, square: Square) -> Bitboard {
        self.moves_from(square).map(|(_, to)| to).collect()
    }

    fn in_check(&self) -> bool {
        self.board.is_check()
    }

    fn board_grid(&self) -> BoardGrid {
        let mut grid: BoardGrid = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.occupant(utils::grid_square(row, col));
            }
        }
        grid
    }

    fn position_notation(&self) -> String {
        utils::board_to_fen(&self.board)
    }

    fn apply_move(&self, from: Square, to: Square) -> Result<Self, BoardError> {
        // The surface never offers a piece choice, so promotions become queens.
        let m = self
            .moves_from(from)
            .find(|(m, target)| *target == to && matches!(m.promotion(), None | Some(Role::Queen)))
            .map(|(m, _)| m)
            .ok_or(BoardError::IllegalMove { from, to })?;

        let board = self.board.clone().play(&m)?;
        Ok(Self { board })
    }
}
