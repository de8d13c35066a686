use shakmaty::{Bitboard, Color, Piece, Square};
use crate::error::BoardError;

/// Occupants of the board as the surface draws it: row 0 is rank 8, column 0 is file a.
pub type BoardGrid = [[Option<Piece>; 8]; 8];

/// The rules side of the board: position queries and move application.
///
/// Implementations hold an immutable position. `apply_move` returns the
/// successor position and leaves `self` untouched.
pub trait GameState: Sized {
    /// The piece standing on `square`, if any
    fn occupant(&self, square: Square) -> Option<Piece>;

    fn side_to_move(&self) -> Color;

    /// Every square the piece on `square` can legally move to
    fn legal_destinations(&self, square: Square) -> Bitboard;

    /// Whether the side to move is in check
    fn in_check(&self) -> bool;

    fn board_grid(&self) -> BoardGrid;

    /// The position in FEN
    fn position_notation(&self) -> String;

    /// Play `from` to `to`, or report why it cannot be played
    fn apply_move(&self, from: Square, to: Square) -> Result<Self, BoardError>;
}
