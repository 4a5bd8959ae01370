//! Chess game module: one human against the AI, or two humans on one board
//!
//! # Module Organization
//!
//! - `session` - [`ChessSession`], the game state machine
//! - `ai` - Game mode/settings and background AI scheduling
//! - `resources` - Status, selection, promotion and captured-piece state
//! - `events` - Outcome and capture events
//! - `feedback` - Encouraging messages for young players
//! - `error` - Rejection reasons for session operations

pub mod ai;
pub mod error;
pub mod events;
pub mod feedback;
pub mod resources;
pub mod session;

pub use ai::{GameMode, GameSettings, PlayerColor};
pub use error::{GameError, GameResult};
pub use events::{GameEvent, OutcomeEvent, PlayerResult};
pub use resources::{CapturedPieces, GameStatus, PendingPromotion, Selection};
pub use session::{ChessSession, NewGameOptions, SessionView, SquareClick, SubmitOutcome};
