//! Result types for scoring.

use crate::board::QuestionRef;
use crate::player::PlayerId;

/// Judgment passed on an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The answer was accepted.
    Correct,
    /// The answer was rejected.
    Wrong,
}

impl From<bool> for Verdict {
    fn from(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Wrong }
    }
}

/// Outcome of scoring an open question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    /// The question that was scored.
    pub question: QuestionRef,
    /// The player who answered.
    pub player_id: PlayerId,
    /// Index of that player in seating order.
    pub player_index: usize,
    /// The verdict.
    pub verdict: Verdict,
    /// Point value of the question.
    pub points: u32,
    /// Signed change applied to the player's score.
    pub delta: i64,
    /// The player's score after the change.
    pub score: i64,
    /// Whether the turn moved to a different player.
    pub turn_passed: bool,
}
