use pyo3::prelude::*;
use pyo3::types::PyDict;
use numpy::{IntoPyArray, PyArray1};
use shakmaty::{Piece, Role, Square};
use crate::board::{BoardFrame, ChessBoard};
use crate::config::{BoardConfig, DEFAULT_BOARD_WIDTH};
use crate::game::{utils, GameState};

/// A Python wrapper for the Rust ChessBoard
#[pyclass(unsendable)]
pub struct PyChessBoard {
    board: ChessBoard,
    on_move_callback: Option<Py<PyAny>>,
    on_render_callback: Option<Py<PyAny>>,
}

#[pymethods]
impl PyChessBoard {
    /// Create a board, optionally from a FEN string, with optional highlight colours
    #[new]
    #[pyo3(signature = (fen=None, board_width=DEFAULT_BOARD_WIDTH, move_color=None, capture_color=None, selected_color=None, check_color=None))]
    fn new(
        fen: Option<String>,
        board_width: u32,
        move_color: Option<String>,
        capture_color: Option<String>,
        selected_color: Option<String>,
        check_color: Option<String>,
    ) -> PyResult<Self> {
        let mut config = BoardConfig::default().with_board_width(board_width);
        config.fen = fen;
        if let Some(color) = move_color {
            config.palette.move_color = color;
        }
        if let Some(color) = capture_color {
            config.palette.capture_color = color;
        }
        if let Some(color) = selected_color {
            config.palette.selected_color = color;
        }
        if let Some(color) = check_color {
            config.palette.check_color = color;
        }
        Self::from_config(config)
    }

    /// Create a board from a FEN string
    #[staticmethod]
    fn from_fen(fen: &str) -> PyResult<Self> {
        Self::from_config(BoardConfig::default().with_fen(fen))
    }

    /// Register a callback function that will be called when a move is played
    fn register_on_move_callback(&mut self, callback: Py<PyAny>) -> PyResult<()> {
        self.on_move_callback = Some(callback);
        Ok(())
    }

    /// Register a callback function that will be called with every new frame
    fn register_on_render_callback(&mut self, callback: Py<PyAny>) -> PyResult<()> {
        self.on_render_callback = Some(callback);
        Ok(())
    }

    /// Piece clicked on the board surface
    fn on_piece_click(&mut self, _piece: &str, square: &str) -> PyResult<()> {
        let square = utils::parse_square(square)?;
        self.board.on_piece_click(square);
        self.notify_render()
    }

    /// Piece picked up for dragging
    fn on_piece_drag_begin(&mut self, _piece: &str, square: &str) -> PyResult<()> {
        let square = utils::parse_square(square)?;
        self.board.on_piece_drag_begin(square);
        self.notify_render()
    }

    /// Piece dropped on a square; the drop is always accepted
    fn on_piece_drop(&mut self, source: &str, target: &str) -> PyResult<bool> {
        let source = utils::parse_square(source)?;
        let target = utils::parse_square(target)?;
        if self.board.drop_piece(source, target) {
            self.notify_move(source, target)?;
        }
        self.notify_render()?;
        Ok(true)
    }

    /// Square clicked on the board surface
    fn on_square_click(&mut self, square: &str) -> PyResult<()> {
        let target = utils::parse_square(square)?;
        let source = self.board.selected_square();
        if self.board.click_square(target) {
            if let Some(source) = source {
                self.notify_move(source, target)?;
            }
        }
        self.notify_render()
    }

    /// Get the current position as FEN string
    fn get_fen(&self) -> String {
        self.board.game().position_notation()
    }

    /// Side to move, `w` or `b`
    fn get_turn(&self) -> String {
        self.board.game().side_to_move().char().to_string()
    }

    fn in_check(&self) -> bool {
        self.board.game().in_check()
    }

    fn selected_square(&self) -> Option<String> {
        self.board.selected_square().map(|square| square.to_string())
    }

    /// Highlighted destinations of the selected piece
    fn available_moves(&self) -> Vec<String> {
        self.board
            .highlights()
            .into_iter()
            .map(|square| square.to_string())
            .collect()
    }

    /// Square styles for the board surface, keyed by square name
    fn square_styles<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        styles_dict(py, &self.board.frame())
    }

    /// Occupants of all 64 squares, a1 first; positive codes for white,
    /// negative for black, 0 for empty
    fn board_array<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i8>> {
        let game = self.board.game();
        let cells: Vec<i8> = (0..64u32)
            .map(|index| game.occupant(Square::new(index)).map_or(0, piece_code))
            .collect();
        cells.into_pyarray(py)
    }
}

// Private implementations not exposed to Python
impl PyChessBoard {
    fn from_config(config: BoardConfig) -> PyResult<Self> {
        let board = ChessBoard::from_config(config)?;
        Ok(Self {
            board,
            on_move_callback: None,
            on_render_callback: None,
        })
    }

    /// Private method to notify the Python callback about a move
    fn notify_move(&self, from: Square, to: Square) -> PyResult<()> {
        Python::with_gil(|py| {
            if let Some(callback) = &self.on_move_callback {
                // Create a dictionary with move information
                let locals = PyDict::new(py);
                locals.set_item("from", from.to_string())?;
                locals.set_item("to", to.to_string())?;
                locals.set_item("fen", self.board.game().position_notation())?;
                
                // Call the callback
                let _ = callback.call1(py, (locals,));
            }
            Ok(())
        })
    }

    /// Private method to hand the current frame to the Python surface
    fn notify_render(&self) -> PyResult<()> {
        Python::with_gil(|py| {
            if let Some(callback) = &self.on_render_callback {
                let frame = self.board.frame();
                let locals = PyDict::new(py);
                locals.set_item("position", &frame.position)?;
                locals.set_item("board_width", frame.board_width)?;
                locals.set_item("square_styles", styles_dict(py, &frame)?)?;

                let _ = callback.call1(py, (locals,));
            }
            Ok(())
        })
    }
}

fn styles_dict<'py>(py: Python<'py>, frame: &BoardFrame) -> PyResult<Bound<'py, PyDict>> {
    let styles = PyDict::new(py);
    for (square, style) in &frame.square_styles {
        let entry = PyDict::new(py);
        entry.set_item("backgroundColor", &style.background_color)?;
        styles.set_item(square.to_string(), entry)?;
    }
    Ok(styles)
}

fn piece_code(piece: Piece) -> i8 {
    let code = match piece.role {
        Role::Pawn => 1,
        Role::Knight => 2,
        Role::Bishop => 3,
        Role::Rook => 4,
        Role::Queen => 5,
        Role::King => 6,
    };
    if piece.color.is_white() { code } else { -code }
}
