//! Audio and visual cue notifications.

/// A side effect the host should play when a transition happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A question opened; start the looping thinking music.
    ThinkingStart,
    /// Stop the thinking music.
    ThinkingStop,
    /// A correct answer was scored.
    Correct,
    /// A wrong answer was scored.
    Wrong,
    /// Celebration effect after a correct answer.
    Celebrate,
}

impl Cue {
    /// Returns a stable lowercase name for the cue.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThinkingStart => "thinking_start",
            Self::ThinkingStop => "thinking_stop",
            Self::Correct => "correct",
            Self::Wrong => "wrong",
            Self::Celebrate => "celebrate",
        }
    }
}

/// Receiver of cue notifications.
///
/// Called synchronously from the game's commands; implementations should
/// return quickly and never call back into the game.
pub trait CueSink {
    /// Handles a single cue.
    fn cue(&mut self, cue: Cue);
}

impl<F: FnMut(Cue)> CueSink for F {
    fn cue(&mut self, cue: Cue) {
        self(cue);
    }
}
