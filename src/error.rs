//! Error types for board and session operations.

use thiserror::Error;

/// Errors that can occur while parsing a question file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No category was recognized anywhere in the text.
    #[error("no rounds found in the question text")]
    NoRoundsFound,
}

/// Errors that can occur while playing a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The command is not valid in the current game state.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The question has already been played.
    #[error("question has already been answered")]
    AlreadyAnswered,
    /// There are no players to answer or score.
    #[error("no players in the game")]
    NoPlayers,
    /// Category not found in the current round.
    #[error("category not found")]
    CategoryNotFound,
    /// Question not found in the category.
    #[error("question not found")]
    QuestionNotFound,
    /// The question belongs to a round that is not currently shown.
    #[error("question belongs to another round")]
    WrongRound,
}

/// Errors that can occur when switching rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Round index is out of range.
    #[error("round not found")]
    RoundNotFound,
}

/// Errors that can occur when managing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when editing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// Category not found in the current round.
    #[error("category not found")]
    CategoryNotFound,
    /// Question not found in the category.
    #[error("question not found")]
    QuestionNotFound,
    /// The board cannot be restructured while a question is open.
    #[error("a question is currently open")]
    QuestionOpen,
}
