//! Difficulty-specific move selection
//!
//! Easy and Medium deliberately stray from the searched best move. Medium's
//! candidate filter compares a one-ply static evaluation against the
//! full-depth root value; the mixed scales are part of its tuning.

use super::make_unmake::with_move;
use crate::board::Board;
use crate::evaluation::evaluate;
use rand::seq::IndexedRandom;
use rand::Rng;
use shakmaty::{Move, MoveList};

/// Uniformly random member of `moves`
pub(crate) fn random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).cloned()
}

/// Root moves whose one-ply evaluation is within `tolerance` of `best_value`
///
/// "Within" is directional: above `best_value - tolerance` for White,
/// below `best_value + tolerance` for Black.
pub(crate) fn near_best_candidates(
    board: &mut Board,
    moves: &MoveList,
    best_value: f64,
    maximizing: bool,
    tolerance: f64,
) -> Vec<Move> {
    moves
        .iter()
        .filter(|m| {
            let value = with_move(board, m, |b| evaluate(b));
            if maximizing {
                value > best_value - tolerance
            } else {
                value < best_value + tolerance
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_move_is_legal() {
        let board = Board::new();
        let moves = board.legal_moves();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let m = random_move(&moves, &mut rng).unwrap();
            assert!(moves.contains(&m));
        }
    }

    #[test]
    fn test_random_move_empty_list() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_move(&[], &mut rng).is_none());
    }

    #[test]
    fn test_near_best_filters_blunders() {
        //! Dropping the queen must not count as "near best" when winning a rook
        let mut board = Board::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 b - - 0 1").unwrap();
        let fen = board.fen();
        let moves = board.legal_moves();
        // value after ...Qxd2 is roughly -(9 + 0.5) for Black
        let candidates = near_best_candidates(&mut board, &moves, -9.0, false, 2.0);

        assert!(!candidates.is_empty());
        assert!(candidates.len() < moves.len());
        assert_eq!(board.fen(), fen, "filter must leave the board as it was");
    }

    #[test]
    fn test_near_best_infinite_value_for_winner() {
        //! When the best value is a forced mate nothing else is near it
        let mut board = Board::new();
        let moves = board.legal_moves();
        let candidates =
            near_best_candidates(&mut board, &moves, f64::INFINITY, true, 2.0);
        assert!(candidates.is_empty());
    }
}
