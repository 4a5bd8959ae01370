//! Game mode, player colour and the per-game settings bundle
//!
//! Controls who plays which side and how strong the AI opponent is.
//!
//! # Game Modes
//!
//! - **Ai**: One human player vs the AI opponent (the human picks a colour)
//! - **Local**: Two humans sharing the board (hot-seat)
//!
//! # Difficulty
//!
//! Strength comes from [`chess_engine::Difficulty`]: a fixed search depth
//! plus a selection policy that lets the easier levels make mistakes.
//!
//! | Difficulty | Depth | Behaviour                          |
//! |------------|-------|------------------------------------|
//! | Easy       | 1 ply | Half its moves are random          |
//! | Medium     | 2 ply | Sometimes plays a "good enough" move |
//! | Hard       | 3 ply | Always plays its best move         |

use chess_engine::{Difficulty, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Game mode selection
///
/// Determines whether the side the human does not play is computer-controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Human vs AI opponent
    #[default]
    Ai,
    /// Two humans on one board
    Local,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Ai => "ai",
            GameMode::Local => "local",
        })
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" => Ok(GameMode::Ai),
            "local" => Ok(GameMode::Local),
            other => Err(format!("unknown game mode '{other}' (ai, local)")),
        }
    }
}

/// The colour the human plays in AI mode
///
/// Serialized as `"white"` / `"black"`; converts to and from the rules
/// engine's [`Side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    #[default]
    White,
    Black,
}

impl From<PlayerColor> for Side {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::White => Side::White,
            PlayerColor::Black => Side::Black,
        }
    }
}

impl From<Side> for PlayerColor {
    fn from(side: Side) -> Self {
        match side {
            Side::White => PlayerColor::White,
            Side::Black => PlayerColor::Black,
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerColor::White => "White",
            PlayerColor::Black => "Black",
        })
    }
}

impl FromStr for PlayerColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(PlayerColor::White),
            "black" | "b" => Ok(PlayerColor::Black),
            other => Err(format!("unknown colour '{other}' (white, black)")),
        }
    }
}

/// Mode, difficulty and human colour for one game
///
/// The session keeps two of these: the preferences used by the next
/// `new_game`, and the settings the running game was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub player_color: PlayerColor,
}

impl GameSettings {
    /// The side the AI plays, if any
    pub fn ai_side(&self) -> Option<Side> {
        match self.mode {
            GameMode::Ai => Some(Side::from(self.player_color).other()),
            GameMode::Local => None,
        }
    }

    /// Whether `side` is moved by a person
    pub fn is_human(&self, side: Side) -> bool {
        self.ai_side() != Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_settings_default() {
        //! Defaults match a fresh install: AI game, Easy, human plays White
        let settings = GameSettings::default();
        assert_eq!(settings.mode, GameMode::Ai);
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.player_color, PlayerColor::White);
        assert_eq!(settings.ai_side(), Some(Side::Black));
    }

    #[test]
    fn test_local_mode_has_no_ai_side() {
        let settings = GameSettings {
            mode: GameMode::Local,
            ..GameSettings::default()
        };
        assert_eq!(settings.ai_side(), None);
        assert!(settings.is_human(Side::White));
        assert!(settings.is_human(Side::Black));
    }

    #[test]
    fn test_human_plays_black() {
        let settings = GameSettings {
            player_color: PlayerColor::Black,
            ..GameSettings::default()
        };
        assert_eq!(settings.ai_side(), Some(Side::White));
        assert!(!settings.is_human(Side::White));
        assert!(settings.is_human(Side::Black));
    }

    #[test]
    fn test_serialized_names() {
        //! Names match the stored preference format
        assert_eq!(serde_json::to_string(&GameMode::Local).unwrap(), "\"local\"");
        assert_eq!(serde_json::to_string(&PlayerColor::Black).unwrap(), "\"black\"");
        let settings: GameSettings =
            serde_json::from_str(r#"{"mode":"local","playerColor":"black"}"#).unwrap();
        assert_eq!(settings.mode, GameMode::Local);
        assert_eq!(settings.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_parse_from_text() {
        assert_eq!("AI".parse::<GameMode>(), Ok(GameMode::Ai));
        assert_eq!("b".parse::<PlayerColor>(), Ok(PlayerColor::Black));
        assert!("robot".parse::<GameMode>().is_err());
    }
}
