//! Chess engine for the chess companion
//!
//! A small, deliberately beatable opponent: material plus centrality
//! evaluation, fixed-depth minimax with alpha-beta pruning, and difficulty
//! levels that mix in randomness. Move legality comes from `shakmaty`.
//!
//! ## Module Organization
//!
//! - `api` - AI move choice and game state queries
//! - `board` - Rules-engine adapter with apply/undo
//! - `constants` - Piece values, weights, difficulty tuning
//! - `error` - Engine error types
//! - `evaluation` - Static position evaluation
//! - `search` - Alpha-beta search and difficulty selection
//! - `types` - Moves, difficulties, re-exported piece/side types
//!
//! ## Example
//!
//! ```
//! use chess_engine::{choose_move, Board, Difficulty};
//! use rand::SeedableRng;
//!
//! let mut board = Board::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mv = choose_move(&mut board, Difficulty::Hard, &mut rng).unwrap();
//! board.apply(&mv).unwrap();
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod search;
pub mod types;

pub use api::{analyse, board_state, choose_move, BoardState, DrawReason, SearchReport, SelectionPath};
pub use board::{AppliedMove, Board};
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::evaluate;
pub use types::{parse_square, Difficulty, MoveSpec, PieceKind, Side};

pub use shakmaty::{Piece, Square};
