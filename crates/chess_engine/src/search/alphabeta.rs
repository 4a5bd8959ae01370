//! Alpha-beta search (minimax form)
//!
//! White maximizes, Black minimizes. Checkmate scores are infinite, so a
//! forced mate anywhere inside the horizon dominates any material count.

use super::make_unmake::with_move;
use super::SearchStats;
use crate::board::Board;
use crate::constants::{DRAW_SCORE, MATE_SCORE};
use crate::evaluation::evaluate;

/// Value of a position where the search stops
///
/// A mated side to move is worst for whoever is to move: `-inf` when the
/// maximizer is mated, `+inf` when the minimizer is.
pub fn leaf_value(board: &Board, maximizing: bool) -> f64 {
    if board.is_checkmate() {
        if maximizing {
            -MATE_SCORE
        } else {
            MATE_SCORE
        }
    } else if board.is_draw() {
        DRAW_SCORE
    } else {
        evaluate(board)
    }
}

/// Minimax value of `board` searched `depth` plies deep
///
/// Moves are tried in rules-engine order; the loop stops once
/// `beta <= alpha`. The board is unchanged when this returns.
pub fn alphabeta(
    board: &mut Board,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes += 1;

    if depth == 0 || board.is_game_over() {
        return leaf_value(board, maximizing);
    }

    let moves = board.legal_moves();

    if maximizing {
        let mut best = -MATE_SCORE;
        for m in &moves {
            let score = with_move(board, m, |b| {
                alphabeta(b, depth - 1, alpha, beta, false, stats)
            });
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = MATE_SCORE;
        for m in &moves {
            let score = with_move(board, m, |b| {
                alphabeta(b, depth - 1, alpha, beta, true, stats)
            });
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain minimax without bounds, the reference for pruning
    fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> f64 {
        if depth == 0 || board.is_game_over() {
            return leaf_value(board, maximizing);
        }
        let moves = board.legal_moves();
        let scores = moves
            .iter()
            .map(|m| with_move(board, m, |b| minimax(b, depth - 1, !maximizing)));
        if maximizing {
            scores.fold(-MATE_SCORE, f64::max)
        } else {
            scores.fold(MATE_SCORE, f64::min)
        }
    }

    const SAMPLE_POSITIONS: [&str; 6] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        "6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1",
        "4k3/8/8/3q4/8/8/3R4/4K3 b - - 0 1",
        "r3k2r/ppp2ppp/2n5/3qp3/8/2N5/PPP2PPP/R2QK2R w KQkq - 0 10",
    ];

    #[test]
    fn test_pruning_matches_minimax_value() {
        //! Alpha-beta must return the same value as unpruned minimax
        for fen in SAMPLE_POSITIONS {
            let mut board = Board::from_fen(fen).unwrap();
            let maximizing = board.turn() == shakmaty::Color::White;
            for depth in 1..=3 {
                let mut stats = SearchStats::default();
                let pruned = alphabeta(
                    &mut board,
                    depth,
                    -MATE_SCORE,
                    MATE_SCORE,
                    maximizing,
                    &mut stats,
                );
                let full = minimax(&mut board, depth, maximizing);
                assert!(
                    pruned == full || (pruned - full).abs() < 1e-9,
                    "{fen} depth {depth}: pruned {pruned} vs minimax {full}"
                );
            }
        }
    }

    #[test]
    fn test_root_value_matches_minimax() {
        //! The root loop reports the unpruned minimax value, up to Hard's depth
        for fen in SAMPLE_POSITIONS {
            let mut board = Board::from_fen(fen).unwrap();
            for depth in 1..=crate::types::Difficulty::Hard.depth() {
                let mut stats = SearchStats::default();
                let root = crate::search::search_root(&mut board, depth, &mut stats).unwrap();
                let full = minimax(&mut board, depth, root.maximizing);
                assert!(
                    root.value == full || (root.value - full).abs() < 1e-9,
                    "{fen} depth {depth}: root {} vs minimax {full}",
                    root.value
                );
                assert_eq!(board.ply_count(), 0);
            }
        }
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let mut board = Board::from_fen(SAMPLE_POSITIONS[2]).unwrap();
        let fen = board.fen();
        let mut stats = SearchStats::default();
        alphabeta(&mut board, 3, -MATE_SCORE, MATE_SCORE, true, &mut stats);
        assert_eq!(board.fen(), fen);
        assert_eq!(board.ply_count(), 0);
        assert!(stats.nodes > 1);
        assert!(stats.cutoffs > 0, "depth 3 from a middlegame should prune");
    }

    #[test]
    fn test_leaf_value_checkmate_signs() {
        // White is mated (fool's mate), White to move
        let board =
            Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(board.is_checkmate());
        assert_eq!(leaf_value(&board, true), f64::NEG_INFINITY);
        assert_eq!(leaf_value(&board, false), f64::INFINITY);
    }

    #[test]
    fn test_leaf_value_draw_is_zero() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(leaf_value(&board, false), 0.0);
    }
}
