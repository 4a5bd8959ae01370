//! Error types for core module
//!
//! Provides custom error types for host-side concerns: configuration and
//! saved-state persistence.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Configuration value could not be parsed
    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: String, value: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
