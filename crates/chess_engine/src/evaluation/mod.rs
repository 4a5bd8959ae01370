//! Position evaluation
//!
//! Scores are in pawn units from White's point of view: positive favours
//! White (the first mover), negative favours Black.
//!
//! ## Module Organization
//!
//! - `material` - piece values plus a small centrality bonus per piece
//! - `position` - full evaluation (material + centrality + mobility)

mod material;
mod position;

pub use material::{centrality_bonus, evaluate_material};
pub use position::{evaluate, mobility};
