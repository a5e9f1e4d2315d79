//! Board types: questions, categories, and rounds.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Number of question cells rendered per category column.
pub const BOARD_ROWS: usize = 5;

/// Answer text used when a question has no `Ответ:` line.
pub const MISSING_ANSWER: &str = "Ответ не указан";

const PLACEHOLDER_TITLE: &str = "Загрузка...";
const PLACEHOLDER_PROMPT: &str = "Нет файла questions.txt";
const PLACEHOLDER_ANSWER: &str = "...";

/// A single point-valued question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Point value awarded or deducted when scored.
    pub points: u32,
    /// The question text shown to players.
    pub prompt: String,
    /// The answer text shown on reveal.
    pub answer: String,
    /// Whether the question has been played (scored or dismissed).
    pub answered: bool,
}

impl Question {
    /// Creates an unplayed question.
    #[must_use]
    pub fn new(points: u32, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            points,
            prompt: prompt.into(),
            answer: answer.into(),
            answered: false,
        }
    }
}

/// A themed column of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// The category title.
    pub title: String,
    /// Questions in source order.
    pub questions: Vec<Question>,
}

impl Category {
    /// Creates an empty category.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Creates a category with one empty question per ladder step.
    #[must_use]
    pub fn with_ladder(title: impl Into<String>, ladder: &[u32]) -> Self {
        Self {
            title: title.into(),
            questions: ladder
                .iter()
                .map(|&points| Question::new(points, "", ""))
                .collect(),
        }
    }

    /// Returns the board cells of this column.
    ///
    /// Always yields [`BOARD_ROWS`] slots; missing questions are `None`.
    pub fn cells(&self) -> impl Iterator<Item = Option<&Question>> {
        (0..BOARD_ROWS).map(|row| self.questions.get(row))
    }
}

/// One phase of the game, holding several categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    /// Categories in board column order.
    pub categories: Vec<Category>,
}

impl Round {
    /// Creates a round from its categories.
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The round shown before any question file is loaded.
    #[must_use]
    pub fn placeholder(ladder: &[u32]) -> Self {
        let mut category = Category::new(PLACEHOLDER_TITLE);
        category.questions = ladder
            .iter()
            .map(|&points| Question::new(points, PLACEHOLDER_PROMPT, PLACEHOLDER_ANSWER))
            .collect();
        Self::new(alloc::vec![category])
    }

    /// Returns whether every question in the round has been played.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.questions().all(|q| q.answered)
    }

    /// Iterates over every question in the round.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.iter().flat_map(|c| c.questions.iter())
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns whether the round has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Tab label of a round, derived purely from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundLabel {
    /// A regular round, numbered from 1.
    Part(usize),
    /// The last round when there is more than one.
    Final,
}

impl RoundLabel {
    /// Returns the label of the round at `index` out of `count` rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use quizboard::RoundLabel;
    ///
    /// assert_eq!(RoundLabel::for_index(0, 3), RoundLabel::Part(1));
    /// assert_eq!(RoundLabel::for_index(1, 3), RoundLabel::Part(2));
    /// assert_eq!(RoundLabel::for_index(2, 3), RoundLabel::Final);
    /// assert_eq!(RoundLabel::for_index(0, 1), RoundLabel::Part(1));
    /// ```
    #[must_use]
    pub const fn for_index(index: usize, count: usize) -> Self {
        if index != 0 && count > 1 && index == count - 1 {
            Self::Final
        } else {
            Self::Part(index + 1)
        }
    }
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part(n) => write!(f, "Part {n}"),
            Self::Final => f.write_str("Final"),
        }
    }
}

/// Location of a question on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRef {
    /// Round index.
    pub round: usize,
    /// Category index within the round.
    pub category: usize,
    /// Question index within the category.
    pub question: usize,
}

impl fmt::Display for QuestionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.round, self.category, self.question)
    }
}

/// Coerces editor input into a point value.
///
/// Leading whitespace is skipped and the leading run of ASCII digits is
/// read. Input without such a prefix, or one that overflows, yields 0.
///
/// # Example
///
/// ```
/// use quizboard::board::coerce_points;
///
/// assert_eq!(coerce_points(" 300"), 300);
/// assert_eq!(coerce_points("250pts"), 250);
/// assert_eq!(coerce_points("abc"), 0);
/// assert_eq!(coerce_points("-100"), 0);
/// ```
#[must_use]
pub fn coerce_points(input: &str) -> u32 {
    let input = input.trim_start();
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input[..end].parse().unwrap_or(0)
}
