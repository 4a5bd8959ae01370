//! Player progress across games
//!
//! - `tracker` - [`ProgressStats`] and the [`ProgressTracker`] reducer

pub mod tracker;

pub use tracker::{ProgressStats, ProgressTracker};
