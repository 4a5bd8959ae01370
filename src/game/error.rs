//! Error types for game module
//!
//! Every rejection leaves the session exactly as it was; the error only
//! tells the caller why nothing happened.

use chess_engine::ChessEngineError;

/// Reasons a session operation was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game has finished; start a new one first
    #[error("Game is over")]
    GameOver,

    /// The AI is still choosing its move
    #[error("AI is thinking")]
    AiThinking,

    /// The side to move is controlled by the AI
    #[error("Not your turn")]
    NotYourTurn,

    /// A promotion piece must be chosen (or the promotion cancelled) first
    #[error("Promotion pending: choose a piece for {from}{to}")]
    PromotionPending { from: String, to: String },

    /// Promotion resolution requested with nothing pending
    #[error("No promotion is pending")]
    NoPendingPromotion,

    /// Move rejected by the rules engine
    #[error("Illegal move: {uci}")]
    IllegalMove { uci: String },

    /// Not enough moves on the board to undo
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Engine-level failure (bad FEN, bad square text)
    #[error(transparent)]
    Engine(#[from] ChessEngineError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
