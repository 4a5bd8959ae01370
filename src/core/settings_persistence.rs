//! Saved state persistence
//!
//! Saves and loads [`SavedState`] (progress plus the preferences of the last
//! game) to/from a JSON file.
//!
//! # File Location
//!
//! `chess_state.json` in the platform configuration directory, e.g.
//! `~/.config/chess-companion/chess_state.json` on Linux. Falls back to the
//! working directory when no configuration directory can be determined.
//!
//! # Error Handling
//!
//! - Load failures fall back to default state
//! - Save failures are logged but don't interrupt play

use crate::core::error::CoreResult;
use crate::game::ai::{GameMode, GameSettings, PlayerColor};
use crate::progress::ProgressStats;
use chess_engine::Difficulty;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// State filename
const STATE_FILENAME: &str = "chess_state.json";

/// What survives between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedState {
    pub progress: ProgressStats,
    pub difficulty: Difficulty,
    pub game_mode: GameMode,
    pub player_color: PlayerColor,
}

impl SavedState {
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            mode: self.game_mode,
            difficulty: self.difficulty,
            player_color: self.player_color,
        }
    }

    pub fn new(progress: ProgressStats, settings: GameSettings) -> Self {
        Self {
            progress,
            difficulty: settings.difficulty,
            game_mode: settings.mode,
            player_color: settings.player_color,
        }
    }
}

/// Path of the state file in the user's configuration directory
pub fn state_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chess-companion", "chess-companion") {
        proj_dirs.config_dir().join(STATE_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(STATE_FILENAME)
    }
}

/// Read and parse a state file
pub fn read_state(path: &Path) -> CoreResult<SavedState> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize and write a state file, creating its directory if needed
pub fn write_state(path: &Path, state: &SavedState) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load saved state, falling back to defaults on any problem
pub fn load_state(path: &Path) -> SavedState {
    if !path.exists() {
        info!("[SETTINGS] No saved state at {:?}. Using defaults.", path);
        return SavedState::default();
    }

    match read_state(path) {
        Ok(state) => {
            info!("[SETTINGS] Loaded saved state from {:?}", path);
            state
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load saved state at {:?}: {}. Using defaults.",
                path, e
            );
            SavedState::default()
        }
    }
}

/// Save state, logging instead of failing
pub fn save_state(path: &Path, state: &SavedState) {
    match write_state(path, state) {
        Ok(()) => info!("[SETTINGS] Saved state to {:?}", path),
        Err(e) => error!("[SETTINGS] Failed to save state at {:?}: {}", path, e),
    }
}
