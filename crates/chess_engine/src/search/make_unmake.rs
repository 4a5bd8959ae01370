//! Move making and unmaking for search
//!
//! The apply/undo pair lives in one function so no caller can forget the
//! undo, including when a pruning cutoff ends a loop early.

use crate::board::Board;
use shakmaty::Move;

/// Play `m`, run `f` on the resulting position, then take `m` back
pub(crate) fn with_move<T>(board: &mut Board, m: &Move, f: impl FnOnce(&mut Board) -> T) -> T {
    board.play_unchecked(m);
    let result = f(board);
    board.undo_last_move();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_move_restores_board() {
        let mut board = Board::new();
        let fen = board.fen();
        let moves = board.legal_moves();

        let plies = with_move(&mut board, &moves[0], |b| b.ply_count());

        assert_eq!(plies, 1, "move should be on the board inside the closure");
        assert_eq!(board.ply_count(), 0);
        assert_eq!(board.fen(), fen);
    }
}
