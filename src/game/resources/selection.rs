//! Piece selection state for click-to-move
//!
//! Tracks the square the player picked and the destinations its piece can
//! legally reach. Cleared after every move and whenever the player clicks
//! somewhere that is neither a destination nor one of their own pieces.

use chess_engine::Square;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Square of the selected piece
    pub square: Option<Square>,
    /// Legal destinations of the selected piece
    pub destinations: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, square: Square, destinations: Vec<Square>) {
        self.square = Some(square);
        self.destinations = destinations;
    }

    pub fn clear(&mut self) {
        self.square = None;
        self.destinations.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.square.is_some()
    }

    /// Whether clicking `square` should move the selected piece there
    pub fn is_destination(&self, square: Square) -> bool {
        self.square.is_some() && self.destinations.contains(&square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_clear() {
        let mut selection = Selection::default();
        assert!(!selection.is_destination(Square::E4));

        selection.select(Square::E2, vec![Square::E3, Square::E4]);
        assert!(selection.is_selected());
        assert!(selection.is_destination(Square::E4));
        assert!(!selection.is_destination(Square::E5));

        selection.clear();
        assert!(!selection.is_selected());
        assert!(selection.destinations.is_empty());
    }
}
