//! Parser for the plain-text question format.
//!
//! The format is line oriented:
//!
//! ```text
//! 1
//!
//! Тема 1. Наука
//! 100. Вопрос про науку
//! Ответ: 42
//!
//! 2
//!
//! Тема 1. Финал
//! 500. Последний вопрос
//! Ответ: Конец
//! ```
//!
//! Each trimmed line is checked, in order, as a round separator (one or two
//! digits alone), a theme (`Тема`), a question (`<points>. <prompt>`), and an
//! answer (`Ответ: <text>`). Lines that match nothing, or that have nothing to
//! attach to, are dropped.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::mem;

use log::{debug, trace};

use crate::board::{Category, MISSING_ANSWER, Question, QuestionRef, Round};
use crate::error::ParseError;

const THEME_KEYWORD: &str = "Тема";
const ANSWER_KEYWORD: &str = "Ответ:";

/// Separator lines are shorter than this many characters.
const SEPARATOR_MAX_LEN: usize = 3;

/// Parses question text into rounds.
///
/// # Errors
///
/// Returns [`ParseError::NoRoundsFound`] if no category was recognized.
///
/// # Example
///
/// ```
/// use quizboard::parser::parse;
///
/// let rounds = parse("Тема 1. Наука\n100. Вопрос\nОтвет: 42").unwrap();
/// assert_eq!(rounds.len(), 1);
/// assert_eq!(rounds[0].categories[0].title, "Наука");
/// assert_eq!(rounds[0].categories[0].questions[0].answer, "42");
/// ```
pub fn parse(text: &str) -> Result<Vec<Round>, ParseError> {
    let mut builder = Builder::default();
    for line in text.split('\n') {
        builder.push_line(line.trim());
    }
    builder.finish()
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Separator,
    Theme(&'a str),
    Question(u32, &'a str),
    Answer(&'a str),
    Unrecognized,
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        Line::Blank
    } else if is_separator(line) {
        Line::Separator
    } else if let Some(title) = theme_title(line) {
        Line::Theme(title)
    } else if let Some((points, prompt)) = question(line) {
        Line::Question(points, prompt)
    } else if let Some(answer) = answer(line) {
        Line::Answer(answer)
    } else {
        Line::Unrecognized
    }
}

fn is_separator(line: &str) -> bool {
    line.len() < SEPARATOR_MAX_LEN && line.bytes().all(|b| b.is_ascii_digit())
}

/// Matches `Тема`, optional number and dot, then the title.
///
/// When the optional parts consume the whole line, the final character is
/// taken as the title, as a backtracking match would.
fn theme_title(line: &str) -> Option<&str> {
    let rest = strip_prefix_ignore_case(line, THEME_KEYWORD)?;
    let last = rest.char_indices().last().map(|(index, _)| index)?;

    let tail = rest
        .trim_start()
        .trim_start_matches(|c: char| c.is_ascii_digit());
    let tail = tail.strip_prefix('.').unwrap_or(tail).trim();

    if tail.is_empty() {
        Some(rest[last..].trim())
    } else {
        Some(tail)
    }
}

fn question(line: &str) -> Option<(u32, &str)> {
    let digits = line.find(|c: char| !c.is_ascii_digit())?;
    if digits == 0 {
        return None;
    }

    let prompt = line[digits..].strip_prefix('.')?.trim();
    if prompt.is_empty() {
        return None;
    }

    let points = line[..digits].parse().ok()?;
    Some((points, prompt))
}

fn answer(line: &str) -> Option<&str> {
    let text = strip_prefix_ignore_case(line, ANSWER_KEYWORD)?.trim();
    (!text.is_empty()).then_some(text)
}

fn strip_prefix_ignore_case<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let mut chars = line.chars();
    for expected in keyword.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}

/// Where the most recently created question lives.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// In the round still being accumulated.
    Open { category: usize, question: usize },
    /// In a round that has already been closed.
    Closed(QuestionRef),
}

#[derive(Debug, Default)]
struct Builder {
    rounds: Vec<Round>,
    current: Vec<Category>,
    category_open: bool,
    last_question: Option<Slot>,
}

impl Builder {
    fn push_line(&mut self, line: &str) {
        match classify(line) {
            Line::Blank => {}
            Line::Separator => self.close_round(),
            Line::Theme(title) => {
                self.current.push(Category::new(title));
                self.category_open = true;
            }
            Line::Question(points, prompt) => self.push_question(points, prompt, line),
            Line::Answer(text) => self.set_answer(text, line),
            Line::Unrecognized => trace!("dropping unrecognized line {line:?}"),
        }
    }

    fn push_question(&mut self, points: u32, prompt: &str, line: &str) {
        if !self.category_open {
            trace!("dropping question outside a category: {line:?}");
            return;
        }

        let category = self.current.len() - 1;
        if let Some(open) = self.current.last_mut() {
            open.questions.push(Question::new(points, prompt, MISSING_ANSWER));
            self.last_question = Some(Slot::Open {
                category,
                question: open.questions.len() - 1,
            });
        }
    }

    fn set_answer(&mut self, text: &str, line: &str) {
        let target = match self.last_question {
            Some(Slot::Open { category, question }) => self
                .current
                .get_mut(category)
                .and_then(|c| c.questions.get_mut(question)),
            Some(Slot::Closed(at)) => self
                .rounds
                .get_mut(at.round)
                .and_then(|r| r.categories.get_mut(at.category))
                .and_then(|c| c.questions.get_mut(at.question)),
            None => None,
        };

        match target {
            Some(question) => question.answer = text.to_string(),
            None => trace!("dropping answer without a question: {line:?}"),
        }
    }

    fn close_round(&mut self) {
        if self.current.is_empty() {
            return;
        }

        let round = self.rounds.len();
        if let Some(Slot::Open { category, question }) = self.last_question {
            self.last_question = Some(Slot::Closed(QuestionRef {
                round,
                category,
                question,
            }));
        }

        self.rounds.push(Round::new(mem::take(&mut self.current)));
        self.category_open = false;
    }

    fn finish(mut self) -> Result<Vec<Round>, ParseError> {
        self.close_round();

        if self.rounds.is_empty() {
            return Err(ParseError::NoRoundsFound);
        }

        debug!("parsed {} round(s)", self.rounds.len());
        Ok(self.rounds)
    }
}
