//! Player records and score bookkeeping.

use alloc::string::String;
use core::fmt;

/// Opaque, unique player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub(crate) u32);

impl PlayerId {
    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A player at the table.
///
/// `earned` accumulates points gained and `lost` accumulates points
/// deducted as a non-positive number; `score` moves with both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: i64,
    earned: i64,
    lost: i64,
    correct: u32,
    wrong: u32,
    avatar_seed: String,
}

impl Player {
    /// Creates a player with a zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, avatar_seed: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            earned: 0,
            lost: 0,
            correct: 0,
            wrong: 0,
            avatar_seed: avatar_seed.into(),
        }
    }

    /// Records a correct answer worth `points`.
    ///
    /// Totals saturate at the `i64` bounds.
    pub fn award(&mut self, points: u32) {
        let points = i64::from(points);
        self.score = self.score.saturating_add(points);
        self.earned = self.earned.saturating_add(points);
        self.correct += 1;
    }

    /// Records a wrong answer worth `points`.
    pub fn deduct(&mut self, points: u32) {
        let points = i64::from(points);
        self.score = self.score.saturating_sub(points);
        self.lost = self.lost.saturating_sub(points);
        self.wrong += 1;
    }

    /// Clears score and statistics, keeping name and avatar.
    pub fn reset_stats(&mut self) {
        self.score = 0;
        self.earned = 0;
        self.lost = 0;
        self.correct = 0;
        self.wrong = 0;
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the current score (may be negative).
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Overwrites the score. Statistics are left untouched.
    pub const fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    /// Returns the total points gained from correct answers.
    #[must_use]
    pub const fn earned(&self) -> i64 {
        self.earned
    }

    /// Returns the total points deducted for wrong answers (zero or negative).
    #[must_use]
    pub const fn lost(&self) -> i64 {
        self.lost
    }

    /// Returns the number of correct answers.
    #[must_use]
    pub const fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Returns the number of wrong answers.
    #[must_use]
    pub const fn wrong_count(&self) -> u32 {
        self.wrong
    }

    /// Returns the seed used for avatar lookup.
    #[must_use]
    pub fn avatar_seed(&self) -> &str {
        &self.avatar_seed
    }

    pub(crate) fn set_avatar_seed(&mut self, seed: String) {
        self.avatar_seed = seed;
    }
}
