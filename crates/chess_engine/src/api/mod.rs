//! Public API for the chess engine
//!
//! Provides high-level functions for AI move selection and game state
//! queries over a [`Board`](crate::board::Board).
//!
//! ## Module Organization
//!
//! - `reply` - AI move choice per difficulty (choose_move, analyse)
//! - `state` - Game state classification (board_state)

mod reply;
mod state;

pub use reply::{analyse, choose_move, SearchReport, SelectionPath};
pub use state::{board_state, BoardState, DrawReason};
