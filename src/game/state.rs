//! Game state types.

/// Question flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No question is open; the active player picks a cell.
    #[default]
    Idle,
    /// A question is open with its answer hidden; the answering player
    /// either answers (reveal) or passes.
    Deciding,
    /// The answer is shown and awaits a correct/wrong judgment.
    Revealed,
}

/// Represents whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Turn {
    /// Index of the player who picks the next question.
    pub active: usize,
    /// Index of the player currently answering the open question.
    pub answering: usize,
}
