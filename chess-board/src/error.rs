use shakmaty::{Chess, PlayError, PositionError, ParseSquareError, Square};
use shakmaty::fen::ParseFenError;
use thiserror::Error;
#[cfg(feature = "python")]
use pyo3::PyErr;
#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;

/// Custom error type for board operations
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Position error: {0}")]
    PositionError(#[from] PositionError<Chess>),

    #[error("FEN parsing error: {0}")]
    FenParseError(#[from] ParseFenError),
    
    #[error("Play error: {0}")]
    PlayError(#[from] PlayError<Chess>),

    #[error("Square parsing error: {0}")]
    SquareParseError(#[from] ParseSquareError),

    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}

// Implement automatic conversion from BoardError to PyErr
#[cfg(feature = "python")]
impl From<BoardError> for PyErr {
    fn from(err: BoardError) -> PyErr {
        // Convert BoardError to PyValueError with the error message
        PyValueError::new_err(err.to_string())
    }
}
