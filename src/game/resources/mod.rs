//! Chess session resources
//!
//! Plain state owned by the session and exposed read-only to hosts.
//!
//! # Resource Categories
//!
//! ## Game Status
//! - [`GameStatus`] - Playing or one of the terminal results
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected piece and its legal destinations
//! - [`PendingPromotion`] - Pawn move waiting for a piece choice
//!
//! ## Game History
//! - [`CapturedPieces`] - Material tracking and advantage calculation

pub mod captured;
pub mod game_over;
pub mod promotion;
pub mod selection;

pub use captured::{piece_symbol, CapturedPieces};
pub use game_over::{side_name, GameStatus};
pub use promotion::{PendingPromotion, PROMOTION_CHOICES};
pub use selection::Selection;
