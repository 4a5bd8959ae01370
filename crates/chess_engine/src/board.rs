//! Board: the rules-engine surface consumed by search and the game session
//!
//! Wraps a `shakmaty::Chess` position and adds what the rest of the crate
//! needs from a rules engine:
//!
//! - legal move listing (all, or from one square)
//! - apply / undo, backed by a stack of earlier positions
//! - checkmate, stalemate, draw and check queries
//! - FEN serialization
//!
//! Every [`Board::apply`] or [`Board::play_unchecked`] pushes exactly one
//! entry; [`Board::undo_last_move`] pops exactly one. Search relies on that
//! pairing to hand the board back unchanged.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{MoveSpec, PieceKind, Side};
use shakmaty::fen::Fen;
use shakmaty::{
    CastlingMode, Chess, EnPassantMode, Move, MoveList, Piece, Position, Role, Square,
};

/// Halfmoves without capture or pawn move after which the game is drawn
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// A move that has been played on a [`Board`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub spec: MoveSpec,
    pub side: Side,
    pub role: PieceKind,
    pub captured: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl AppliedMove {
    fn from_move(m: &Move, side: Side) -> Self {
        Self {
            spec: MoveSpec::from_move(m),
            side,
            role: m.role(),
            captured: m.capture(),
            is_castle: m.is_castle(),
            is_en_passant: m.is_en_passant(),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    before: Chess,
    applied: AppliedMove,
}

/// Mutable chess position with undo history
#[derive(Debug, Clone, Default)]
pub struct Board {
    position: Chess,
    undo_stack: Vec<Snapshot>,
}

impl Board {
    /// Standard starting position
    pub fn new() -> Self {
        Self::default()
    }

    /// Set up a position from FEN (standard castling)
    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        let invalid = |message: String| ChessEngineError::InvalidFen {
            fen: fen.to_string(),
            message,
        };

        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;

        Ok(Self {
            position,
            undo_stack: Vec::new(),
        })
    }

    /// The underlying rules-engine position (read-only)
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// FEN serialization of the current position
    pub fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    /// Side to move
    pub fn turn(&self) -> Side {
        self.position.turn()
    }

    /// Number of plies applied since the board was set up
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// All occupied squares with their pieces, a1 first
    pub fn pieces(&self) -> Vec<(Square, Piece)> {
        let board = self.position.board();
        board
            .occupied()
            .into_iter()
            .filter_map(|square| board.piece_at(square).map(|piece| (square, piece)))
            .collect()
    }

    /// All legal moves for the side to move, in rules-engine order
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    /// Legal moves starting on `square`
    pub fn legal_moves_from(&self, square: Square) -> Vec<MoveSpec> {
        self.position
            .legal_moves()
            .iter()
            .filter(|m| m.from() == Some(square))
            .map(MoveSpec::from_move)
            .collect()
    }

    /// Distinct destination squares reachable from `square`
    ///
    /// The four promotion choices of one pawn push collapse into a single
    /// destination.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        let mut targets: Vec<Square> = Vec::new();
        for spec in self.legal_moves_from(square) {
            if !targets.contains(&spec.to) {
                targets.push(spec.to);
            }
        }
        targets
    }

    /// Whether a legal pawn promotion exists from `from` to `to`
    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        self.position
            .legal_moves()
            .iter()
            .any(|m| m.is_promotion() && m.from() == Some(from) && m.to() == to)
    }

    /// Resolve a square description against the current position
    pub fn resolve(&self, spec: &MoveSpec) -> ChessEngineResult<Move> {
        spec.to_uci()
            .to_move(&self.position)
            .map_err(|_| ChessEngineError::IllegalMove {
                uci: spec.to_string(),
            })
    }

    /// Apply a move if it is legal; on error the board is untouched
    pub fn apply(&mut self, spec: &MoveSpec) -> ChessEngineResult<AppliedMove> {
        let m = self.resolve(spec)?;
        Ok(self.play_unchecked(&m))
    }

    /// Apply a move taken from [`Board::legal_moves`] of this very position
    ///
    /// No legality check is performed.
    pub fn play_unchecked(&mut self, m: &Move) -> AppliedMove {
        let applied = AppliedMove::from_move(m, self.position.turn());
        let before = self.position.clone();
        self.position.play_unchecked(m);
        self.undo_stack.push(Snapshot {
            before,
            applied: applied.clone(),
        });
        applied
    }

    /// Revert the most recent move; `None` when nothing has been played
    pub fn undo_last_move(&mut self) -> Option<AppliedMove> {
        let snapshot = self.undo_stack.pop()?;
        self.position = snapshot.before;
        Some(snapshot.applied)
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> impl Iterator<Item = &AppliedMove> {
        self.undo_stack.iter().map(|s| &s.applied)
    }

    pub fn last_move(&self) -> Option<&AppliedMove> {
        self.undo_stack.last().map(|s| &s.applied)
    }

    pub fn is_in_check(&self) -> bool {
        self.position.is_check()
    }

    /// Square of the side-to-move's king when it is in check
    pub fn king_in_check_square(&self) -> Option<Square> {
        if !self.position.is_check() {
            return None;
        }
        self.position.board().king_of(self.position.turn())
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES
    }

    /// The current position occurred at least twice before
    ///
    /// Only positions since the last capture or pawn move can repeat, so the
    /// scan is bounded by the halfmove clock.
    pub fn is_threefold_repetition(&self) -> bool {
        let window = self.position.halfmoves() as usize;
        let mut seen = 1;
        for snapshot in self.undo_stack.iter().rev().take(window) {
            if same_position(&snapshot.before, &self.position) {
                seen += 1;
                if seen >= 3 {
                    return true;
                }
            }
        }
        false
    }

    /// Draw by any rule: stalemate, insufficient material, fifty moves, repetition
    pub fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_fifty_move_draw()
            || self.is_threefold_repetition()
    }

    /// Checkmate or any draw
    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }
}

/// Positions repeat when placement, side to move, castling rights and
/// en passant square all match.
fn same_position(a: &Chess, b: &Chess) -> bool {
    a.turn() == b.turn() && a.board() == b.board() && repetition_key(a) == repetition_key(b)
}

fn repetition_key(pos: &Chess) -> String {
    let fen = Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

/// Whether `role` moving to `to` reaches the promotion rank for `side`
pub fn reaches_last_rank(role: Role, side: Side, to: Square) -> bool {
    if role != Role::Pawn {
        return false;
    }
    let rank = u32::from(to.rank());
    match side {
        Side::White => rank == 7,
        Side::Black => rank == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_square;

    fn spec(text: &str) -> MoveSpec {
        text.parse().unwrap()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(board.legal_moves().len(), 20);
        assert_eq!(board.turn(), Side::White);
        assert_eq!(board.ply_count(), 0);
    }

    #[test]
    fn test_apply_then_undo_restores_fen() {
        //! Apply/undo round trip must restore the serialization exactly
        let mut board = Board::new();
        let before = board.fen();

        for m in board.legal_moves() {
            board.play_unchecked(&m);
            board.undo_last_move();
            assert_eq!(board.fen(), before, "undo after {m:?} changed the position");
        }
        assert_eq!(board.ply_count(), 0);
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board.fen();
        let result = board.apply(&spec("e2e5"));
        assert!(matches!(result, Err(ChessEngineError::IllegalMove { .. })));
        assert_eq!(board.fen(), before);
        assert_eq!(board.ply_count(), 0);
    }

    #[test]
    fn test_capture_is_recorded() {
        let mut board = Board::new();
        for text in ["e2e4", "d7d5"] {
            board.apply(&spec(text)).unwrap();
        }
        let applied = board.apply(&spec("e4d5")).unwrap();
        assert_eq!(applied.captured, Some(Role::Pawn));
        assert_eq!(applied.side, Side::White);
        assert_eq!(board.last_move(), Some(&applied));
    }

    #[test]
    fn test_castling_uses_king_squares() {
        let mut board =
            Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let destinations = board.legal_destinations(Square::E1);
        assert!(destinations.contains(&Square::G1));
        assert!(destinations.contains(&Square::C1));

        let applied = board.apply(&spec("e1g1")).unwrap();
        assert!(applied.is_castle);
        assert_eq!(applied.spec.to, Square::G1);
        assert_eq!(
            board.piece_at(Square::F1).map(|p| p.role),
            Some(Role::Rook)
        );
    }

    #[test]
    fn test_promotion_detection() {
        let board = Board::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        assert!(board.is_promotion_move(Square::E7, Square::E8));
        assert!(!board.is_promotion_move(Square::E1, Square::E2));
        // four promotion choices, one destination
        assert_eq!(board.legal_moves_from(Square::E7).len(), 4);
        assert_eq!(board.legal_destinations(Square::E7), vec![Square::E8]);
        // a bare push without a piece is not a legal move
        assert!(board.resolve(&spec("e7e8")).is_err());
        assert!(board.resolve(&spec("e7e8q")).is_ok());
    }

    #[test]
    fn test_checkmate_and_check_square() {
        // fool's mate
        let mut board = Board::new();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            board.apply(&spec(text)).unwrap();
        }
        assert!(board.is_checkmate());
        assert!(board.is_in_check());
        assert!(board.is_game_over());
        assert!(!board.is_draw());
        assert_eq!(board.king_in_check_square(), Some(Square::E1));
    }

    #[test]
    fn test_stalemate_is_draw() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(board.is_stalemate());
        assert!(board.is_draw());
        assert!(!board.is_checkmate());
    }

    #[test]
    fn test_insufficient_material_is_draw() {
        let board = Board::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1").unwrap();
        assert!(board.is_insufficient_material());
        assert!(board.is_draw());
    }

    #[test]
    fn test_fifty_move_rule() {
        let board = Board::from_fen("8/8/4k3/8/8/R2K4/8/8 w - - 100 80").unwrap();
        assert!(board.is_fifty_move_draw());
        assert!(board.is_draw());
    }

    #[test]
    fn test_threefold_repetition() {
        let mut board = Board::new();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        for text in shuffle {
            board.apply(&spec(text)).unwrap();
        }
        assert!(!board.is_threefold_repetition(), "second occurrence only");
        for text in shuffle {
            board.apply(&spec(text)).unwrap();
        }
        assert!(board.is_threefold_repetition());
        assert!(board.is_draw());
    }

    #[test]
    fn test_invalid_fen_rejected() {
        assert!(matches!(
            Board::from_fen("not a fen"),
            Err(ChessEngineError::InvalidFen { .. })
        ));
    }

    #[test]
    fn test_reaches_last_rank() {
        let e8 = parse_square("e8").unwrap();
        let e1 = parse_square("e1").unwrap();
        assert!(reaches_last_rank(Role::Pawn, Side::White, e8));
        assert!(reaches_last_rank(Role::Pawn, Side::Black, e1));
        assert!(!reaches_last_rank(Role::Pawn, Side::White, e1));
        assert!(!reaches_last_rank(Role::Queen, Side::White, e8));
    }
}
