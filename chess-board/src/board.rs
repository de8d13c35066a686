use shakmaty::{Bitboard, Square};
use std::collections::HashMap;
use crate::config::BoardConfig;
use crate::controller::{MoveOutcome, Selection, SelectionController};
use crate::error::BoardError;
use crate::game::{ChessGame, GameState};
use crate::style::{derive_styles, SquareStyle, StyleMap};

/// Everything the board surface needs to paint one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFrame {
    /// Position in FEN
    pub position: String,
    pub board_width: u32,
    pub square_styles: HashMap<Square, SquareStyle>,
}

/// A surface that paints board frames
pub trait BoardView {
    fn render(&mut self, frame: &BoardFrame);
}

/// Interactive chess board: owns the game, the selection and the render settings.
#[derive(Debug, Clone)]
pub struct ChessBoard<G: GameState = ChessGame> {
    game: G,
    controller: SelectionController,
    config: BoardConfig,
}

impl ChessBoard<ChessGame> {
    /// Create a board at the initial position with default settings
    pub fn new() -> Self {
        Self::with_game(ChessGame::new(), BoardConfig::default())
    }

    /// Create a board from its configuration
    pub fn from_config(config: BoardConfig) -> Result<Self, BoardError> {
        let game = ChessGame::from_fen_opt(config.fen.as_deref())?;
        Ok(Self::with_game(game, config))
    }
}

impl Default for ChessBoard<ChessGame> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> ChessBoard<G> {
    pub fn with_game(game: G, config: BoardConfig) -> Self {
        Self {
            game,
            controller: SelectionController::new(),
            config,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        self.controller.selection()
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.controller.selected_square()
    }

    pub fn highlights(&self) -> Bitboard {
        self.controller.highlights()
    }

    /// Piece clicked on the surface
    pub fn on_piece_click(&mut self, square: Square) {
        self.controller.select(&self.game, square);
    }

    /// Piece picked up for dragging
    pub fn on_piece_drag_begin(&mut self, square: Square) {
        self.controller.select(&self.game, square);
    }

    /// Piece dropped on `target`. The drop event is always accepted, whether
    /// or not a move was played.
    pub fn on_piece_drop(&mut self, source: Square, target: Square) -> bool {
        self.drop_piece(source, target);
        true
    }

    /// Square clicked on the surface
    pub fn on_square_click(&mut self, square: Square) {
        self.click_square(square);
    }

    /// Drop handling; returns whether the position changed
    pub fn drop_piece(&mut self, source: Square, target: Square) -> bool {
        let outcome = self.controller.resolve(&self.game, source, target);
        self.commit(outcome)
    }

    /// Square click handling; returns whether the position changed
    pub fn click_square(&mut self, square: Square) -> bool {
        let outcome = self.controller.click(&self.game, square);
        self.commit(outcome)
    }

    fn commit(&mut self, outcome: MoveOutcome<G>) -> bool {
        match outcome {
            MoveOutcome::Applied(next) => {
                self.game = next;
                true
            }
            // rejected moves leave the position as it was
            MoveOutcome::Rejected(_) | MoveOutcome::Cancelled | MoveOutcome::Ignored => false,
        }
    }

    /// Highlights for the current state
    pub fn styles(&self) -> StyleMap {
        derive_styles(&self.game, self.controller.selection())
    }

    pub fn frame(&self) -> BoardFrame {
        BoardFrame {
            position: self.game.position_notation(),
            board_width: self.config.board_width,
            square_styles: self.config.palette.resolve(&self.styles()),
        }
    }

    pub fn render_to<V: BoardView>(&self, view: &mut V) {
        view.render(&self.frame());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Highlight, Palette};

    #[derive(Default)]
    struct RecordingView {
        frames: Vec<BoardFrame>,
    }

    impl BoardView for RecordingView {
        fn render(&mut self, frame: &BoardFrame) {
            self.frames.push(frame.clone());
        }
    }

    #[test]
    fn drag_and_click_select_alike() {
        let mut clicked = ChessBoard::new();
        let mut dragged = ChessBoard::new();
        clicked.on_piece_click(Square::G1);
        dragged.on_piece_drag_begin(Square::G1);
        assert_eq!(clicked.selection(), dragged.selection());
        assert_eq!(clicked.styles(), dragged.styles());
    }

    #[test]
    fn drop_is_always_handled() {
        let mut board = ChessBoard::new();
        assert!(board.on_piece_drop(Square::E2, Square::E4));
        assert_eq!(board.game().position_notation(), ChessGame::new().position_notation());

        board.on_piece_drag_begin(Square::E2);
        assert!(board.on_piece_drop(Square::E2, Square::E5));
        assert!(board.on_piece_drop(Square::E2, Square::E4));
    }

    #[test]
    fn square_click_moves_selected_piece() {
        let mut board = ChessBoard::new();
        board.on_piece_click(Square::G1);
        board.on_square_click(Square::F3);
        assert!(board.game().occupant(Square::F3).is_some());
        assert!(board.game().occupant(Square::G1).is_none());
        assert_eq!(board.selection(), &Selection::Idle);
    }

    #[test]
    fn frame_carries_position_width_and_colors() {
        let config = BoardConfig::default().with_board_width(640);
        let mut board = ChessBoard::from_config(config).unwrap();
        board.on_piece_click(Square::E2);

        let mut view = RecordingView::default();
        board.render_to(&mut view);

        let frame = &view.frames[0];
        assert_eq!(frame.board_width, 640);
        assert_eq!(frame.position, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(frame.square_styles.len(), 3);
        assert_eq!(frame.square_styles[&Square::E2].background_color, "rgba(0, 0, 255, 0.5)");
        assert_eq!(frame.square_styles[&Square::E4].background_color, "rgba(0, 255, 0, 0.5)");
        assert_eq!(board.styles()[&Square::E3], Highlight::Move);
    }

    #[test]
    fn bad_config_fen_is_an_error() {
        let config = BoardConfig::default().with_fen("8/8/8 w - - 0 1");
        assert!(ChessBoard::from_config(config).is_err());
    }

    #[test]
    fn custom_palette_reaches_the_frame() {
        let palette = Palette {
            selected_color: "yellow".to_string(),
            ..Palette::default()
        };
        let mut board = ChessBoard::from_config(BoardConfig::default().with_palette(palette)).unwrap();
        board.on_piece_click(Square::D2);
        assert_eq!(board.frame().square_styles[&Square::D2].background_color, "yellow");
    }
}
