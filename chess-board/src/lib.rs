//! Interactive chess board controller.
//!
//! Tracks the selected piece and its legal destinations, derives the square
//! highlights a board surface paints, and plays moves on drop or click.
//! Chess rules come from `shakmaty`. With the `python` feature the board is
//! exposed as a Python extension module.

mod error;
pub mod board;
pub mod config;
pub mod controller;
pub mod game;
pub mod style;

#[cfg(feature = "python")]
mod python;

pub use crate::board::{BoardFrame, BoardView, ChessBoard};
pub use crate::config::BoardConfig;
pub use crate::controller::{MoveOutcome, Selection, SelectionController};
pub use crate::error::BoardError;
pub use crate::game::{BoardGrid, ChessGame, GameState};
pub use crate::style::{derive_styles, Highlight, Palette, SquareStyle, StyleMap};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Chess board Python module
#[cfg(feature = "python")]
#[pymodule]
fn chess_board(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyChessBoard>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
