use shakmaty::{Bitboard, Square};
use crate::error::BoardError;
use crate::game::GameState;

/// Selection state of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Idle,
    /// A piece of the side to move is selected, with its legal destinations
    Armed { square: Square, destinations: Bitboard },
}

/// Result of resolving a drop or a click on a destination
#[derive(Debug)]
pub enum MoveOutcome<G> {
    /// The move was played; carries the new game state
    Applied(G),
    /// The target was highlighted but the rules refused the move
    Rejected(BoardError),
    /// The target was not a highlighted destination
    Cancelled,
    /// Nothing to resolve: no selection, or a click off the highlights
    Ignored,
}

impl<G> MoveOutcome<G> {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Tracks which square is selected and where its piece may go.
///
/// Transitions are driven by the board gestures; the controller never
/// mutates the game state itself, it hands back the successor position.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_square(&self) -> Option<Square> {
        match self.selection {
            Selection::Armed { square, .. } => Some(square),
            Selection::Idle => None,
        }
    }

    /// Highlighted destinations, empty when idle
    pub fn highlights(&self) -> Bitboard {
        match self.selection {
            Selection::Armed { destinations, .. } => destinations,
            Selection::Idle => Bitboard::EMPTY,
        }
    }

    pub fn clear(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Select `square`. Arms on a piece of the side to move, otherwise
    /// drops any existing selection.
    pub fn select<G: GameState>(&mut self, game: &G, square: Square) {
        self.selection = match game.occupant(square) {
            Some(piece) if piece.color == game.side_to_move() => Selection::Armed {
                square,
                destinations: game.legal_destinations(square),
            },
            _ => Selection::Idle,
        };
    }

    /// Resolve a move from `from` to `to` against the armed destinations.
    /// Always leaves the controller idle.
    pub fn resolve<G: GameState>(&mut self, game: &G, from: Square, to: Square) -> MoveOutcome<G> {
        let selection = std::mem::take(&mut self.selection);
        match selection {
            Selection::Idle => MoveOutcome::Ignored,
            Selection::Armed { destinations, .. } if destinations.contains(to) => {
                match game.apply_move(from, to) {
                    Ok(next) => MoveOutcome::Applied(next),
                    Err(err) => MoveOutcome::Rejected(err),
                }
            }
            Selection::Armed { .. } => MoveOutcome::Cancelled,
        }
    }

    /// Click on `target`. Moves the selected piece there when `target` is a
    /// highlighted destination; any other click leaves the selection alone.
    pub fn click<G: GameState>(&mut self, game: &G, target: Square) -> MoveOutcome<G> {
        match self.selection {
            Selection::Armed { square, destinations } if destinations.contains(target) => {
                self.resolve(game, square, target)
            }
            _ => MoveOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ChessGame;
    use shakmaty::Color;

    fn armed_on(game: &ChessGame, square: Square) -> SelectionController {
        let mut controller = SelectionController::new();
        controller.select(game, square);
        controller
    }

    #[test]
    fn selecting_own_piece_arms() {
        let game = ChessGame::new();
        let controller = armed_on(&game, Square::G1);
        assert_eq!(controller.selected_square(), Some(Square::G1));
        assert_eq!(controller.highlights(), game.legal_destinations(Square::G1));
        assert_eq!(controller.highlights().count(), 2);
    }

    #[test]
    fn selecting_empty_or_enemy_square_goes_idle() {
        let game = ChessGame::new();
        let mut controller = armed_on(&game, Square::E2);

        controller.select(&game, Square::E5);
        assert_eq!(controller.selection(), &Selection::Idle);

        controller.select(&game, Square::E2);
        controller.select(&game, Square::D7);
        assert_eq!(controller.selection(), &Selection::Idle);
        assert!(controller.highlights().is_empty());
    }

    #[test]
    fn reselecting_rearms_on_new_square() {
        let game = ChessGame::new();
        let mut controller = armed_on(&game, Square::E2);
        controller.select(&game, Square::B1);
        assert_eq!(controller.selected_square(), Some(Square::B1));
        assert!(controller.highlights().contains(Square::C3));
        assert!(!controller.highlights().contains(Square::E4));
    }

    #[test]
    fn resolve_on_destination_applies() {
        let game = ChessGame::new();
        let mut controller = armed_on(&game, Square::E2);
        match controller.resolve(&game, Square::E2, Square::E4) {
            MoveOutcome::Applied(next) => assert_eq!(next.side_to_move(), Color::Black),
            other => panic!("expected applied move, got {:?}", other),
        }
        assert_eq!(controller.selection(), &Selection::Idle);
    }

    #[test]
    fn resolve_off_destination_cancels() {
        let game = ChessGame::new();
        let mut controller = armed_on(&game, Square::E2);
        assert!(matches!(controller.resolve(&game, Square::E2, Square::E5), MoveOutcome::Cancelled));
        assert_eq!(controller.selection(), &Selection::Idle);
    }

    #[test]
    fn resolve_while_idle_is_ignored() {
        let game = ChessGame::new();
        let mut controller = SelectionController::new();
        assert!(matches!(controller.resolve(&game, Square::E2, Square::E4), MoveOutcome::Ignored));
        assert_eq!(controller.selection(), &Selection::Idle);
    }

    #[test]
    fn click_elsewhere_keeps_selection() {
        let game = ChessGame::new();
        let mut controller = armed_on(&game, Square::E2);
        assert!(matches!(controller.click(&game, Square::H5), MoveOutcome::Ignored));
        assert_eq!(controller.selected_square(), Some(Square::E2));

        assert!(controller.click(&game, Square::E3).is_applied());
        assert_eq!(controller.selection(), &Selection::Idle);
    }

    #[test]
    fn clear_drops_selection() {
        let game = ChessGame::new();
        let mut controller = armed_on(&game, Square::E2);
        controller.clear();
        assert_eq!(controller.selected_square(), None);
        assert!(controller.highlights().is_empty());
    }
}
