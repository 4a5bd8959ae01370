//! Full position evaluation
//!
//! Material and centrality from [`super::material`], plus a mobility term
//! credited to whichever side currently holds the move.

use super::material::evaluate_material;
use crate::board::Board;
use crate::constants::MOBILITY_WEIGHT;
use shakmaty::Color;

/// Mobility term: legal move count of the side to move, signed by that side
pub fn mobility(board: &Board) -> f64 {
    let options = board.legal_moves().len() as f64 * MOBILITY_WEIGHT;
    match board.turn() {
        Color::White => options,
        Color::Black => -options,
    }
}

/// Evaluate a position, White positive
///
/// Pure: the board is only read.
pub fn evaluate(board: &Board) -> f64 {
    evaluate_material(board) + mobility(board)
}
