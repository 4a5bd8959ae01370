//! Chess companion: a kid-friendly chess opponent
//!
//! Game sessions against a deliberately beatable AI (or a second player on
//! the same board), with progress tracking across games.
//!
//! ## Module Organization
//!
//! - `game` - Session state machine, AI scheduling, session resources
//! - `progress` - Win/loss/streak bookkeeping
//! - `core` - Configuration and saved state
//!
//! The engine (evaluation, search, rules adapter) lives in the
//! `chess_engine` workspace crate.

pub mod core;
pub mod game;
pub mod progress;

pub use game::{ChessSession, GameMode, NewGameOptions, PlayerColor};
