//! Chess AI opponent
//!
//! The AI never runs on the session's stack. When it is the AI's turn the
//! session schedules a search job and marks itself busy; the host later
//! delivers the reply through `ChessSession::poll_ai` or
//! `ChessSession::wait_for_ai`.
//!
//! # Architecture
//!
//! - `resource`: game mode, player colour, per-game settings
//! - `scheduler`: job runners and the reply type carried back to the session
//!
//! # Stale replies
//!
//! Every job carries the session generation it was scheduled under. A reply
//! whose generation no longer matches, or that arrives after the game ended,
//! is discarded without touching the session.

pub mod resource;
pub mod scheduler;

pub use resource::{GameMode, GameSettings, PlayerColor};
pub use scheduler::{search_job, AiJob, AiReply, AiRunner, DeferredRunner, ThreadRunner};
