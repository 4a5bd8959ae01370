//! Game state classification

use crate::board::Board;
use crate::types::Side;
use serde::Serialize;

/// Why a game ended in a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoves,
    Repetition,
}

/// Where the game stands for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    Playing { in_check: bool },
    Checkmate { winner: Side },
    Draw(DrawReason),
}

impl BoardState {
    pub fn is_over(self) -> bool {
        !matches!(self, BoardState::Playing { .. })
    }
}

/// Classify the current position
///
/// Checkmate takes precedence over every draw rule; stalemate over the
/// remaining ones.
pub fn board_state(board: &Board) -> BoardState {
    if board.is_checkmate() {
        return BoardState::Checkmate {
            winner: board.turn().other(),
        };
    }
    if board.is_stalemate() {
        return BoardState::Draw(DrawReason::Stalemate);
    }
    if board.is_insufficient_material() {
        return BoardState::Draw(DrawReason::InsufficientMaterial);
    }
    if board.is_fifty_move_draw() {
        return BoardState::Draw(DrawReason::FiftyMoves);
    }
    if board.is_threefold_repetition() {
        return BoardState::Draw(DrawReason::Repetition);
    }
    BoardState::Playing {
        in_check: board.is_in_check(),
    }
}
