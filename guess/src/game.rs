//! Secret-number draw and guess evaluation.

use std::cmp::Ordering;

use rand::Rng;

/// Inclusive bounds for the secret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    pub min: i64,
    pub max: i64,
}

/// Draw the secret number uniformly from `range`.
pub fn draw_target<G: Rng + ?Sized>(range: GuessRange, rng: &mut G) -> i64 {
    rng.gen_range(range.min..=range.max)
}

/// Answer to a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Guess was below the target.
    TooLow,
    /// Guess was above the target.
    TooHigh,
    /// Guess matched; `attempts` counts every guess including this one.
    Correct { attempts: u32 },
}

/// One round of the game. The target never changes after construction.
#[derive(Debug)]
pub struct Game {
    target: i64,
    attempts: u32,
}

impl Game {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            attempts: 0,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn guess(&mut self, n: i64) -> Verdict {
        self.attempts = self.attempts.saturating_add(1);
        match n.cmp(&self.target) {
            Ordering::Less => Verdict::TooLow,
            Ordering::Greater => Verdict::TooHigh,
            Ordering::Equal => Verdict::Correct {
                attempts: self.attempts,
            },
        }
    }
}
