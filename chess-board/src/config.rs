use crate::style::Palette;

pub const DEFAULT_BOARD_WIDTH: u32 = 500;

/// Settings for a board component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Starting position in FEN; `None` starts from the initial position
    pub fen: Option<String>,
    /// Pixel width handed to the board surface
    pub board_width: u32,
    pub palette: Palette,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            fen: None,
            board_width: DEFAULT_BOARD_WIDTH,
            palette: Palette::default(),
        }
    }
}

impl BoardConfig {
    pub fn with_fen(mut self, fen: impl Into<String>) -> Self {
        self.fen = Some(fen.into());
        self
    }

    pub fn with_board_width(mut self, board_width: u32) -> Self {
        self.board_width = board_width;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
