//! Engine constants
//!
//! Piece values and evaluation weights are expressed in pawn units (f64),
//! which is the scale the difficulty tuning in [`crate::types`] relies on.

use shakmaty::Role;

pub const PAWN_VALUE: f64 = 1.0;
pub const KNIGHT_VALUE: f64 = 3.0;
pub const BISHOP_VALUE: f64 = 3.0;
pub const ROOK_VALUE: f64 = 5.0;
pub const QUEEN_VALUE: f64 = 9.0;
pub const KING_VALUE: f64 = 100.0;

/// Weight applied per file/rank step towards the board centre
pub const CENTRALITY_WEIGHT: f64 = 0.1;

/// Weight applied per legal move of the side to move
pub const MOBILITY_WEIGHT: f64 = 0.05;

/// Board centre on the 0..=7 file/rank axis
pub const CENTRE: f64 = 3.5;

/// Score of a mated position for the side that delivered mate
pub const MATE_SCORE: f64 = f64::INFINITY;

pub const DRAW_SCORE: f64 = 0.0;

/// Search depth (plies) per difficulty
pub const EASY_DEPTH: u32 = 1;
pub const MEDIUM_DEPTH: u32 = 2;
pub const HARD_DEPTH: u32 = 3;

/// Easy: chance of skipping the search and playing any legal move
pub const EASY_RANDOM_CHANCE: f64 = 0.5;

/// Medium: chance of swapping the best move for a "good enough" one
pub const MEDIUM_SHUFFLE_CHANCE: f64 = 0.2;

/// Medium: how far (in pawns) a one-ply evaluation may trail the best value
pub const MEDIUM_TOLERANCE: f64 = 2.0;

/// Material value of a piece role
pub const fn piece_value(role: Role) -> f64 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}
