//! Minimax search with alpha-beta pruning
//!
//! Fixed-depth search over the [`Board`](crate::board::Board) adapter.
//! Every move tried is taken back before the next one, on every return path,
//! so the board handed in comes back exactly as it was.
//!
//! ## Module Organization
//!
//! - `alphabeta` - recursive minimax with alpha/beta bounds
//! - `make_unmake` - scoped apply/undo around one move
//! - `root` - root move loop and best-move bookkeeping
//! - `selection` - difficulty-specific deviations from the best move

mod alphabeta;
mod make_unmake;
mod root;
mod selection;

pub use alphabeta::{alphabeta, leaf_value};
pub use root::{search_root, RootSearch};
pub(crate) use selection::{near_best_candidates, random_move};

/// Counters gathered during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Branches abandoned because `beta <= alpha`
    pub cutoffs: u64,
}
