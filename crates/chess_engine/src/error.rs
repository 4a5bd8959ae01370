//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! position setup, move validation and square parsing.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Move is not legal in the current position
    #[error("Illegal move: {uci}")]
    IllegalMove { uci: String },

    /// Square text could not be parsed (expects "a1".."h8")
    #[error("Invalid square: {text}")]
    InvalidSquare { text: String },

    /// Move text could not be parsed (expects UCI style, e.g. "e7e8q")
    #[error("Invalid move text: {text}")]
    InvalidMoveText { text: String },

    /// FEN string could not be parsed or describes an impossible position
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
