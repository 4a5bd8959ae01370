//! AI move generation
//!
//! Runs the fixed-depth search for a difficulty and applies its selection
//! policy. The randomness source is passed in so callers can seed it.

use crate::board::Board;
use crate::search::{near_best_candidates, random_move, search_root, SearchStats};
use crate::types::{Difficulty, MoveSpec, SelectionPolicy};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Which branch of the selection policy produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPath {
    /// The searched best move
    Searched,
    /// Easy skipped the search and played a random legal move
    RandomEasy,
    /// Medium swapped the best move for a random near-best candidate
    NearBestMedium,
}

/// The chosen move together with how it was found
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub mv: MoveSpec,
    /// Root search value (White positive); `None` when no search ran
    pub value: Option<f64>,
    pub depth: u32,
    pub stats: SearchStats,
    pub path: SelectionPath,
}

/// Choose a move for the side to move at `difficulty`
///
/// Returns `None` only when the side to move has no legal moves, which the
/// session never asks for. The board is unchanged on return.
pub fn choose_move<R: Rng + ?Sized>(
    board: &mut Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<MoveSpec> {
    analyse(board, difficulty, rng).map(|report| report.mv)
}

/// Like [`choose_move`], but also reports value, node counts and the
/// selection branch taken
pub fn analyse<R: Rng + ?Sized>(
    board: &mut Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<SearchReport> {
    let moves = board.legal_moves();
    debug_assert!(
        !moves.is_empty(),
        "AI asked to move in a position without legal moves"
    );
    if moves.is_empty() {
        return None;
    }

    let profile = difficulty.profile();

    if let SelectionPolicy::RandomMoveChance(chance) = profile.policy {
        if rng.random_bool(chance) {
            let mv = random_move(&moves, rng)?;
            debug!("[AI] {difficulty}: random move {}", MoveSpec::from_move(&mv));
            return Some(SearchReport {
                mv: MoveSpec::from_move(&mv),
                value: None,
                depth: 0,
                stats: SearchStats::default(),
                path: SelectionPath::RandomEasy,
            });
        }
    }

    let mut stats = SearchStats::default();
    let root = search_root(board, profile.depth, &mut stats)?;
    let mut chosen = root.best.clone();
    let mut path = SelectionPath::Searched;

    if let SelectionPolicy::NearBestShuffle { chance, tolerance } = profile.policy {
        if rng.random_bool(chance) {
            let candidates =
                near_best_candidates(board, &moves, root.value, root.maximizing, tolerance);
            if candidates.len() > 1 {
                if let Some(mv) = random_move(&candidates, rng) {
                    debug!(
                        "[AI] {difficulty}: {} near-best candidates, best value {:.2}",
                        candidates.len(),
                        root.value
                    );
                    chosen = mv;
                    path = SelectionPath::NearBestMedium;
                }
            }
        }
    }

    let mv = MoveSpec::from_move(&chosen);
    debug!(
        "[AI] {difficulty}: {mv} value {:.2} depth {} nodes {} cutoffs {}",
        root.value, profile.depth, stats.nodes, stats.cutoffs
    );

    Some(SearchReport {
        mv,
        value: Some(root.value),
        depth: profile.depth,
        stats,
        path,
    })
}
