//! Serialization of rounds back into the question text format.

use alloc::string::String;
use core::fmt::Write;

use crate::board::Round;

/// First line of an exported file. It is not part of the grammar and is
/// dropped when the file is parsed again.
pub const EXPORT_HEADER: &str = "Вопросики (Экспорт)";

/// Serializes rounds into text that [`parse`](crate::parser::parse) accepts.
///
/// Rounds are numbered from 1 on their own line and categories are numbered
/// by their position within the round. Questions with an empty prompt or
/// answer do not survive a round trip, and neither does round numbering past
/// 99, since a three-digit line is not a separator. An empty category title
/// exports as `Тема 1. ` and parses back as `"."`.
///
/// # Example
///
/// ```
/// use quizboard::export::serialize;
/// use quizboard::parser::parse;
///
/// let rounds = parse("Тема 1. Наука\n100. Вопрос\nОтвет: 42").unwrap();
/// let text = serialize(&rounds);
/// assert_eq!(parse(&text).unwrap(), rounds);
/// ```
#[must_use]
pub fn serialize(rounds: &[Round]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{EXPORT_HEADER}\n\n");

    for (round_index, round) in rounds.iter().enumerate() {
        let _ = write!(out, "{}\n\n", round_index + 1);

        for (category_index, category) in round.categories.iter().enumerate() {
            let _ = write!(out, "Тема {}. {}\n\n", category_index + 1, category.title);
            for question in &category.questions {
                let _ = writeln!(out, "{}. {}", question.points, question.prompt);
                let _ = writeln!(out, "Ответ: {}", question.answer);
            }
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
