//! Events emitted by the chess session
//!
//! Outcome events fire once per finished game; capture events fire for every
//! move that removes a piece. The session's progress tracker consumes both
//! as they happen, and hosts can drain them for their own use.

use crate::game::ai::GameMode;
use crate::game::resources::GameStatus;
use chess_engine::{Difficulty, PieceKind, Side};

/// A finished game seen from the human player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerResult {
    Win,
    Loss,
    Draw,
}

impl PlayerResult {
    /// Result for `player` given the winning side (`None` for a draw)
    pub fn for_player(winner: Option<Side>, player: Side) -> Self {
        match winner {
            None => PlayerResult::Draw,
            Some(side) if side == player => PlayerResult::Win,
            Some(_) => PlayerResult::Loss,
        }
    }
}

/// Terminal status transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeEvent {
    /// Result for the configured player colour
    pub result: PlayerResult,
    pub status: GameStatus,
    pub winner: Option<Side>,
    pub difficulty: Difficulty,
    pub mode: GameMode,
}

impl OutcomeEvent {
    /// Whether the tracked player delivered checkmate
    pub fn is_checkmate_win(&self) -> bool {
        self.status == GameStatus::Checkmate && self.result == PlayerResult::Win
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Outcome(OutcomeEvent),
    Capture {
        /// Side that made the capture
        by: Side,
        role: PieceKind,
        /// Whether a person (not the AI) made it
        by_human: bool,
    },
}
