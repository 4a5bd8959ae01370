//! Root move loop
//!
//! Each root move is searched with a fresh full window; the best value for
//! the side to move wins and ties keep the earlier move.

use super::alphabeta::alphabeta;
use super::make_unmake::with_move;
use super::SearchStats;
use crate::board::Board;
use crate::constants::MATE_SCORE;
use shakmaty::{Color, Move};

/// Result of searching every root move
#[derive(Debug, Clone)]
pub struct RootSearch {
    pub best: Move,
    /// Minimax value of `best`, White positive
    pub value: f64,
    /// Whether the side to move at the root is White
    pub maximizing: bool,
}

/// Search all legal root moves `depth` plies deep
///
/// Returns `None` when the side to move has no legal moves. A move that mates
/// on the spot is returned as soon as it is found, so a longer forced mate
/// with the same infinite value cannot shadow it.
pub fn search_root(board: &mut Board, depth: u32, stats: &mut SearchStats) -> Option<RootSearch> {
    let moves = board.legal_moves();
    let maximizing = board.turn() == Color::White;
    let child_depth = depth.saturating_sub(1);

    let mut best = moves.first()?.clone();
    let mut best_value = if maximizing { -MATE_SCORE } else { MATE_SCORE };

    for m in &moves {
        let (value, mates) = with_move(board, m, |b| {
            let value = alphabeta(b, child_depth, -MATE_SCORE, MATE_SCORE, !maximizing, stats);
            (value, b.is_checkmate())
        });

        if mates {
            return Some(RootSearch {
                best: m.clone(),
                value,
                maximizing,
            });
        }

        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best = m.clone();
        }
    }

    Some(RootSearch {
        best,
        value: best_value,
        maximizing,
    })
}
