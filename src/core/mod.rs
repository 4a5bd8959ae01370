//! Host-side concerns: configuration, saved state and their errors
//!
//! - `config` - [`SessionConfig`] from defaults and environment
//! - `settings_persistence` - [`SavedState`] JSON file
//! - `error` - [`CoreError`]

pub mod config;
pub mod error;
pub mod settings_persistence;

pub use config::SessionConfig;
pub use error::{CoreError, CoreResult};
pub use settings_persistence::SavedState;
