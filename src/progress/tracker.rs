//! Cumulative chess progress
//!
//! [`ProgressTracker`] folds game events into [`ProgressStats`]. Only games
//! against the AI count towards results; hot-seat games have no single
//! tracked player.

use crate::game::ai::GameMode;
use crate::game::events::{GameEvent, OutcomeEvent, PlayerResult};
use chess_engine::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Milliseconds since the Unix epoch
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Increment a counter, pinning it at `u32::MAX`
fn bump(counter: &mut u32) {
    *counter = counter.saturating_add(1);
}

/// Win/loss/draw counts, streaks and per-difficulty breakdown
///
/// Field names follow the stored progress document. Every field defaults,
/// so documents written by older versions still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressStats {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub games_drawn: u32,
    pub total_pieces_captured: u32,
    pub total_checkmates: u32,
    pub current_win_streak: u32,
    pub best_win_streak: u32,
    pub easy_wins: u32,
    pub easy_losses: u32,
    pub medium_wins: u32,
    pub medium_losses: u32,
    pub hard_wins: u32,
    pub hard_losses: u32,
    /// Unix timestamp in milliseconds of the last change
    pub last_modified: i64,
}

impl Default for ProgressStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            games_lost: 0,
            games_drawn: 0,
            total_pieces_captured: 0,
            total_checkmates: 0,
            current_win_streak: 0,
            best_win_streak: 0,
            easy_wins: 0,
            easy_losses: 0,
            medium_wins: 0,
            medium_losses: 0,
            hard_wins: 0,
            hard_losses: 0,
            last_modified: now_millis(),
        }
    }
}

impl ProgressStats {
    pub fn wins_at(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_wins,
            Difficulty::Medium => self.medium_wins,
            Difficulty::Hard => self.hard_wins,
        }
    }

    pub fn losses_at(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_losses,
            Difficulty::Medium => self.medium_losses,
            Difficulty::Hard => self.hard_losses,
        }
    }

    fn wins_at_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty {
            Difficulty::Easy => &mut self.easy_wins,
            Difficulty::Medium => &mut self.medium_wins,
            Difficulty::Hard => &mut self.hard_wins,
        }
    }

    fn losses_at_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty {
            Difficulty::Easy => &mut self.easy_losses,
            Difficulty::Medium => &mut self.medium_losses,
            Difficulty::Hard => &mut self.hard_losses,
        }
    }
}

/// Reducer over session events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    stats: ProgressStats,
}

impl ProgressTracker {
    pub fn new(stats: ProgressStats) -> Self {
        Self { stats }
    }

    /// Load from a stored JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json).map(Self::new)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.stats)
    }

    /// Snapshot for the sync collaborator
    pub fn get_progress(&self) -> ProgressStats {
        self.stats.clone()
    }

    /// Replace everything, e.g. with data pulled from sync
    pub fn set_progress(&mut self, stats: ProgressStats) {
        self.stats = stats;
    }

    pub fn stats(&self) -> &ProgressStats {
        &self.stats
    }

    /// Fold one session event into the stats
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Outcome(outcome) => {
                self.record_outcome(outcome);
            }
            GameEvent::Capture { by_human, .. } => {
                if *by_human {
                    self.record_capture();
                }
            }
        }
    }

    /// Count a finished game; returns `false` for games that are not tracked
    pub fn record_outcome(&mut self, outcome: &OutcomeEvent) -> bool {
        if outcome.mode != GameMode::Ai {
            debug!("[PROGRESS] Ignoring {} game outcome", outcome.mode);
            return false;
        }

        match outcome.result {
            PlayerResult::Win => self.record_win(outcome.difficulty, outcome.is_checkmate_win()),
            PlayerResult::Loss => self.record_loss(outcome.difficulty),
            PlayerResult::Draw => self.record_draw(),
        }
        debug!(
            "[PROGRESS] Recorded {:?} at {}: {} played, streak {}",
            outcome.result,
            outcome.difficulty,
            self.stats.games_played,
            self.stats.current_win_streak
        );
        true
    }

    pub fn record_win(&mut self, difficulty: Difficulty, by_checkmate: bool) {
        let stats = &mut self.stats;
        bump(&mut stats.games_played);
        bump(&mut stats.games_won);
        if by_checkmate {
            bump(&mut stats.total_checkmates);
        }
        bump(&mut stats.current_win_streak);
        stats.best_win_streak = stats.best_win_streak.max(stats.current_win_streak);
        bump(stats.wins_at_mut(difficulty));
        self.touch();
    }

    pub fn record_loss(&mut self, difficulty: Difficulty) {
        let stats = &mut self.stats;
        bump(&mut stats.games_played);
        bump(&mut stats.games_lost);
        stats.current_win_streak = 0;
        bump(stats.losses_at_mut(difficulty));
        self.touch();
    }

    pub fn record_draw(&mut self) {
        bump(&mut self.stats.games_played);
        bump(&mut self.stats.games_drawn);
        self.touch();
    }

    pub fn record_capture(&mut self) {
        bump(&mut self.stats.total_pieces_captured);
        self.touch();
    }

    fn touch(&mut self) {
        self.stats.last_modified = now_millis();
    }
}
