use shakmaty::{Role, Square};
use std::collections::HashMap;
use crate::controller::Selection;
use crate::game::{utils, GameState};

/// Highlight applied to a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Legal destination on an empty square
    Move,
    /// Legal destination holding an enemy piece
    Capture,
    /// The armed square
    Selected,
    /// King of the side to move, in check
    Check,
}

/// Per-square highlights for one render
pub type StyleMap = HashMap<Square, Highlight>;

/// Visual style handed to the board surface for one square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareStyle {
    pub background_color: String,
}

/// Background colours for each highlight, as CSS colour strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub move_color: String,
    pub capture_color: String,
    pub selected_color: String,
    pub check_color: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            move_color: "rgba(0, 255, 0, 0.5)".to_string(),
            capture_color: "rgba(255, 0, 0, 0.5)".to_string(),
            selected_color: "rgba(0, 0, 255, 0.5)".to_string(),
            check_color: "rgba(255, 165, 0, 0.7)".to_string(),
        }
    }
}

impl Palette {
    pub fn color(&self, highlight: Highlight) -> &str {
        match highlight {
            Highlight::Move => &self.move_color,
            Highlight::Capture => &self.capture_color,
            Highlight::Selected => &self.selected_color,
            Highlight::Check => &self.check_color,
        }
    }

    pub fn style(&self, highlight: Highlight) -> SquareStyle {
        SquareStyle {
            background_color: self.color(highlight).to_string(),
        }
    }

    /// Resolve a whole style map into surface styles
    pub fn resolve(&self, styles: &StyleMap) -> HashMap<Square, SquareStyle> {
        styles
            .iter()
            .map(|(&square, &highlight)| (square, self.style(highlight)))
            .collect()
    }
}

/// Derive the highlight map from the current selection and position.
///
/// Later layers overwrite earlier ones: destinations, then the selected
/// square, then the checked king.
pub fn derive_styles<G: GameState>(game: &G, selection: &Selection) -> StyleMap {
    let mut styles = StyleMap::new();
    let turn = game.side_to_move();

    if let Selection::Armed { square, destinations } = selection {
        for target in *destinations {
            let highlight = match game.occupant(target) {
                Some(piece) if piece.color != turn => Highlight::Capture,
                _ => Highlight::Move,
            };
            styles.insert(target, highlight);
        }
        styles.insert(*square, Highlight::Selected);
    }

    if game.in_check() {
        if let Some(king) = king_square(game) {
            styles.insert(king, Highlight::Check);
        }
    }

    styles
}

/// First square on the grid holding the king of the side to move
fn king_square<G: GameState>(game: &G) -> Option<Square> {
    let turn = game.side_to_move();
    let grid = game.board_grid();
    grid.iter().enumerate().find_map(|(row, cells)| {
        cells.iter().enumerate().find_map(|(col, cell)| match cell {
            Some(piece) if piece.role == Role::King && piece.color == turn => {
                Some(utils::grid_square(row, col))
            }
            _ => None,
        })
    })
}
