//! Session configuration
//!
//! Values come from defaults, then environment variables, then command-line
//! flags (applied by the binary).
//!
//! | Variable            | Field               | Default |
//! |---------------------|---------------------|---------|
//! | `CHESS_AI_DELAY_MS` | `ai_think_delay_ms` | 500     |
//! | `CHESS_AI_SEED`     | `ai_seed`           | unset   |

use crate::core::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const AI_DELAY_ENV: &str = "CHESS_AI_DELAY_MS";
pub const AI_SEED_ENV: &str = "CHESS_AI_SEED";

/// Pause before the AI answers, in milliseconds
pub const DEFAULT_AI_THINK_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Delay before each AI search starts
    pub ai_think_delay_ms: u64,
    /// Seed for AI and message randomness; `None` seeds from the OS
    pub ai_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_think_delay_ms: DEFAULT_AI_THINK_DELAY_MS,
            ai_seed: None,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(AI_DELAY_ENV) {
            config.ai_think_delay_ms = parse_var(AI_DELAY_ENV, &value)?;
        }
        if let Some(value) = lookup(AI_SEED_ENV) {
            config.ai_seed = Some(parse_var(AI_SEED_ENV, &value)?);
        }
        Ok(config)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.ai_think_delay_ms)
    }
}

fn parse_var(key: &str, value: &str) -> CoreResult<u64> {
    value.trim().parse().map_err(|_| CoreError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}
