//! Material evaluation
//!
//! Sums piece values over the board, each piece also earning a bonus for
//! standing near the centre.

use crate::board::Board;
use crate::constants::*;
use shakmaty::{Color, Square};

/// Centre-proximity bonus of a square, 0.0 in the corners up to 0.6 on d4/e5
pub fn centrality_bonus(square: Square) -> f64 {
    let file = f64::from(u32::from(square.file()));
    let rank = f64::from(u32::from(square.rank()));
    CENTRALITY_WEIGHT * (CENTRE - (file - CENTRE).abs())
        + CENTRALITY_WEIGHT * (CENTRE - (rank - CENTRE).abs())
}

/// Material plus centrality, White positive
pub fn evaluate_material(board: &Board) -> f64 {
    board
        .pieces()
        .into_iter()
        .map(|(square, piece)| {
            let value = piece_value(piece.role) + centrality_bonus(square);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_starting_position_material_balance() {
        let board = Board::new();
        let score = evaluate_material(&board);
        assert!(score.abs() < EPSILON, "symmetric start should be 0, got {score}");
    }

    #[test]
    fn test_centrality_bonus_values() {
        assert!(centrality_bonus(Square::A1).abs() < EPSILON);
        assert!((centrality_bonus(Square::D4) - 0.6).abs() < EPSILON);
        assert!((centrality_bonus(Square::E5) - 0.6).abs() < EPSILON);
        assert!(centrality_bonus(Square::H8).abs() < EPSILON);
        assert!((centrality_bonus(Square::E2) - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_white_up_queen() {
        let board = Board::from_fen("3qk3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let even = evaluate_material(&board);
        assert!(even.abs() < EPSILON);

        let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let score = evaluate_material(&board);
        // queen on d1: 9 + 0.3 (file d) + 0.0 (rank 1)
        assert!((score - 9.3).abs() < EPSILON, "got {score}");
    }

    #[test]
    fn test_black_up_pawn() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1").unwrap();
        let score = evaluate_material(&board);
        // missing e2 pawn: -(1 + 0.3 + 0.1)
        assert!((score + 1.4).abs() < EPSILON, "got {score}");
    }
}
