//! Game status tracking and result messages
//!
//! # Game Over Conditions
//!
//! ## Checkmate
//! The side to move is in check with no legal moves; the other side wins.
//!
//! ## Draw Conditions
//! - **Stalemate**: the side to move has no legal moves but is not in check
//! - **Draw**: insufficient material, fifty-move rule or threefold repetition
//!
//! ## Resignation
//! A player gives up; the opponent wins.

use chess_engine::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the current game stands
///
/// Starts as `Playing`; every other state is terminal until the next new
/// game.
///
/// ```text
/// Playing → Checkmate / Stalemate / Draw / Resigned
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Checkmate,
    Stalemate,
    Draw,
    Resigned,
}

impl GameStatus {
    /// `true` for any non-Playing state
    pub fn is_game_over(self) -> bool {
        self != GameStatus::Playing
    }

    /// Result text for a finished game
    ///
    /// `winner` is the side credited with the win; it is ignored for draws.
    pub fn message(self, winner: Option<Side>) -> String {
        match (self, winner) {
            (GameStatus::Playing, _) => "Game in progress".to_string(),
            (GameStatus::Checkmate, Some(winner)) => {
                format!("{} wins by checkmate!", side_name(winner))
            }
            (GameStatus::Resigned, Some(winner)) => format!(
                "{} resigned - {} wins!",
                side_name(winner.other()),
                side_name(winner)
            ),
            (GameStatus::Checkmate | GameStatus::Resigned, None) => "Game over".to_string(),
            (GameStatus::Stalemate, _) => "Stalemate - it's a draw!".to_string(),
            (GameStatus::Draw, _) => "It's a draw!".to_string(),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::Playing => "playing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
            GameStatus::Resigned => "resigned",
        })
    }
}

/// "White" or "Black"
pub fn side_name(side: Side) -> &'static str {
    match side {
        Side::White => "White",
        Side::Black => "Black",
    }
}
