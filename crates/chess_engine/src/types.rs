//! Core engine types
//!
//! - [`MoveSpec`] - a move as the player (or UI) describes it: from, to, promotion
//! - [`Difficulty`] - opponent strength, mapped through [`DIFFICULTY_TABLE`]
//! - [`SelectionPolicy`] - how a difficulty deviates from pure best play

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Move, Role, Square};
use std::fmt;
use std::str::FromStr;

pub use shakmaty::Color as Side;
pub use shakmaty::Role as PieceKind;

/// A move described by its squares, independent of any position
///
/// Castling is written king-from/king-to (`e1g1`), the way a player drags
/// the king. Immutable value type; resolve it against a position with
/// [`crate::board::Board::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveSpec {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveSpec {
    pub fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Self { from, to, promotion }
    }

    /// Same squares, different promotion piece
    pub fn with_promotion(self, promotion: Option<PieceKind>) -> Self {
        Self { promotion, ..self }
    }

    /// Convert a rules-engine move into its square description
    pub fn from_move(m: &Move) -> Self {
        match m.to_uci(CastlingMode::Standard) {
            UciMove::Normal {
                from,
                to,
                promotion,
            } => Self::new(from, to, promotion),
            UciMove::Put { to, .. } => Self::new(to, to, None),
            UciMove::Null => Self::new(m.to(), m.to(), None),
        }
    }

    pub(crate) fn to_uci(self) -> UciMove {
        UciMove::Normal {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

impl FromStr for MoveSpec {
    type Err = ChessEngineError;

    /// Parse UCI-style text: `e2e4`, `e7e8q`
    fn from_str(s: &str) -> ChessEngineResult<Self> {
        let s = s.trim();
        let invalid = || ChessEngineError::InvalidMoveText {
            text: s.to_string(),
        };

        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }

        let from = parse_square(&s[0..2]).map_err(|_| invalid())?;
        let to = parse_square(&s[2..4]).map_err(|_| invalid())?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Role::from_char(c) {
                Some(role @ (Role::Queen | Role::Rook | Role::Bishop | Role::Knight)) => Some(role),
                _ => return Err(invalid()),
            },
        };

        Ok(Self::new(from, to, promotion))
    }
}

/// Parse a square name such as `"e4"`
pub fn parse_square(text: &str) -> ChessEngineResult<Square> {
    text.trim()
        .parse::<Square>()
        .map_err(|_| ChessEngineError::InvalidSquare {
            text: text.to_string(),
        })
}

/// How a difficulty picks its move once the search is done
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPolicy {
    /// With probability `chance`, skip the search and play a uniformly
    /// random legal move.
    RandomMoveChance(f64),

    /// With probability `chance`, replace the searched best move by a random
    /// member of the root moves whose one-ply evaluation lies within
    /// `tolerance` of the best search value, provided more than one
    /// qualifies.
    NearBestShuffle { chance: f64, tolerance: f64 },

    /// Always play the searched best move.
    BestOnly,
}

/// Search depth plus selection policy for one difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub depth: u32,
    pub policy: SelectionPolicy,
}

/// Difficulty lookup table, indexed by [`Difficulty::index`]
pub const DIFFICULTY_TABLE: [DifficultyProfile; 3] = [
    DifficultyProfile {
        depth: EASY_DEPTH,
        policy: SelectionPolicy::RandomMoveChance(EASY_RANDOM_CHANCE),
    },
    DifficultyProfile {
        depth: MEDIUM_DEPTH,
        policy: SelectionPolicy::NearBestShuffle {
            chance: MEDIUM_SHUFFLE_CHANCE,
            tolerance: MEDIUM_TOLERANCE,
        },
    },
    DifficultyProfile {
        depth: HARD_DEPTH,
        policy: SelectionPolicy::BestOnly,
    },
];

/// AI difficulty levels
///
/// | Difficulty | Depth | Selection                                   |
/// |------------|-------|---------------------------------------------|
/// | Easy       | 1 ply | 50%: random legal move, otherwise best      |
/// | Medium     | 2 ply | 20%: random "good enough" move, otherwise best |
/// | Hard       | 3 ply | always best                                 |
///
/// The randomness on Easy and Medium is deliberate: the opponent is meant to
/// be beatable by children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub const fn profile(self) -> DifficultyProfile {
        DIFFICULTY_TABLE[self.index()]
    }

    pub const fn depth(self) -> u32 {
        self.profile().depth
    }

    pub const fn policy(self) -> SelectionPolicy {
        self.profile().policy
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (easy, medium, hard)")),
        }
    }
}
