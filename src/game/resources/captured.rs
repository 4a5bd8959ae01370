//! Captured pieces tracking
//!
//! Tracks pieces captured by each player and calculates material advantage
//! for the captured-pieces tray.
//!
//! # Material Values
//!
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (never captured)
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: If White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use chess_engine::constants::piece_value as engine_piece_value;
use chess_engine::{AppliedMove, Piece, PieceKind, Side};

/// Pieces captured by both sides
///
/// - `white_captured`: Black pieces that White has captured
/// - `black_captured`: White pieces that Black has captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white_captured: Vec<PieceKind>,
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Rebuild the tray from a move history, oldest move first
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a AppliedMove>) -> Self {
        let mut captured = Self::default();
        for applied in history {
            if let Some(role) = applied.captured {
                captured.add_capture(applied.side.other(), role);
            }
        }
        captured
    }

    /// Record a capture of a `captured_piece_color` piece
    pub fn add_capture(&mut self, captured_piece_color: Side, piece_type: PieceKind) {
        match captured_piece_color {
            // If white piece was captured, black gets credit
            Side::White => self.black_captured.push(piece_type),
            // If black piece was captured, white gets credit
            Side::Black => self.white_captured.push(piece_type),
        }
    }

    /// Material difference in pawns, White positive
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|p| piece_value(*p)).sum();
        let black_score: i32 = self.black_captured.iter().map(|p| piece_value(*p)).sum();
        white_score - black_score
    }

    /// Unicode symbols of the pieces `side` has taken
    pub fn symbols(&self, side: Side) -> String {
        let (taken, taken_color) = match side {
            Side::White => (&self.white_captured, Side::Black),
            Side::Black => (&self.black_captured, Side::White),
        };
        taken
            .iter()
            .map(|role| {
                piece_symbol(Piece {
                    color: taken_color,
                    role: *role,
                })
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.white_captured.clear();
        self.black_captured.clear();
    }
}

/// Pawn-unit value of a captured piece
///
/// Same table as the engine's evaluation, except that a king is worth
/// nothing here since it never reaches the tray.
fn piece_value(piece_type: PieceKind) -> i32 {
    match piece_type {
        PieceKind::King => 0,
        role => engine_piece_value(role) as i32,
    }
}

/// Unicode chess symbol for a piece
pub fn piece_symbol(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Side::White, PieceKind::King) => '\u{2654}',
        (Side::White, PieceKind::Queen) => '\u{2655}',
        (Side::White, PieceKind::Rook) => '\u{2656}',
        (Side::White, PieceKind::Bishop) => '\u{2657}',
        (Side::White, PieceKind::Knight) => '\u{2658}',
        (Side::White, PieceKind::Pawn) => '\u{2659}',
        (Side::Black, PieceKind::King) => '\u{265A}',
        (Side::Black, PieceKind::Queen) => '\u{265B}',
        (Side::Black, PieceKind::Rook) => '\u{265C}',
        (Side::Black, PieceKind::Bishop) => '\u{265D}',
        (Side::Black, PieceKind::Knight) => '\u{265E}',
        (Side::Black, PieceKind::Pawn) => '\u{265F}',
    }
}
