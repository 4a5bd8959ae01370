//! Pawn promotion awaiting a piece choice

use chess_engine::{MoveSpec, PieceKind, Square};

/// Pieces a pawn may promote to, in menu order
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// A pawn move to the last rank held back until the player picks a piece
///
/// While one is outstanding no other move may be submitted. Nothing has been
/// played on the board yet, so cancelling has nothing to restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
}

impl PendingPromotion {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Whether a submission targets this pending move
    pub fn matches(&self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }

    /// The full move once a piece has been chosen
    pub fn complete(&self, piece: PieceKind) -> MoveSpec {
        MoveSpec::new(self.from, self.to, Some(piece))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_builds_promotion_move() {
        let pending = PendingPromotion::new(Square::E7, Square::E8);
        assert!(pending.matches(Square::E7, Square::E8));
        assert!(!pending.matches(Square::D7, Square::E8));
        assert_eq!(pending.complete(PieceKind::Knight).to_string(), "e7e8n");
    }
}
