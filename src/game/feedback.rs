//! Encouraging messages for young players
//!
//! Each category holds a small pool; one entry is picked at random whenever
//! the session has something to say.

use rand::seq::IndexedRandom;
use rand::Rng;

const GOOD_MOVES: &[&str] = &[
    "Nice move!",
    "Great choice!",
    "You're thinking ahead!",
    "That's smart!",
    "Good thinking!",
];

const CAPTURES: &[&str] = &[
    "Got 'em!",
    "Nice capture!",
    "One down!",
    "Excellent!",
    "You took a piece!",
];

const CHECK: &[&str] = &[
    "Check! Keep going!",
    "The king is in danger!",
    "Check! You're on the attack!",
];

const WIN: &[&str] = &[
    "CHECKMATE! You won!",
    "Amazing! You're a chess champion!",
    "Victory! Great game!",
    "You did it! Checkmate!",
];

const LOSE: &[&str] = &[
    "Good game! Want to try again?",
    "That was a tough opponent!",
    "You'll get 'em next time!",
    "Keep practicing, you're getting better!",
];

const DRAW: &[&str] = &[
    "It's a draw! Great battle!",
    "Neither side wins - good fight!",
    "A tie! That was close!",
];

/// Chance that a quiet human move earns a "good move" message
pub const GOOD_MOVE_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    GoodMove,
    Capture,
    Check,
    Win,
    Lose,
    Draw,
}

impl MessageKind {
    pub fn pool(self) -> &'static [&'static str] {
        match self {
            MessageKind::GoodMove => GOOD_MOVES,
            MessageKind::Capture => CAPTURES,
            MessageKind::Check => CHECK,
            MessageKind::Win => WIN,
            MessageKind::Lose => LOSE,
            MessageKind::Draw => DRAW,
        }
    }
}

/// Random message from the `kind` pool
pub fn random_message<R: Rng + ?Sized>(kind: MessageKind, rng: &mut R) -> &'static str {
    kind.pool().choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_messages_come_from_their_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        for kind in [
            MessageKind::GoodMove,
            MessageKind::Capture,
            MessageKind::Check,
            MessageKind::Win,
            MessageKind::Lose,
            MessageKind::Draw,
        ] {
            let message = random_message(kind, &mut rng);
            assert!(kind.pool().contains(&message), "{message} not in {kind:?}");
        }
    }
}
