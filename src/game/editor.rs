use alloc::string::ToString;

use log::debug;

use crate::board::{Category, Question, coerce_points};
use crate::error::EditError;

use super::{Game, GameState};

/// A question attribute edited from the board editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField<'a> {
    /// Point value as typed; coerced with [`coerce_points`].
    Points(&'a str),
    /// Question text.
    Prompt(&'a str),
    /// Answer text.
    Answer(&'a str),
}

impl Game {
    fn edited_question(
        &mut self,
        category: usize,
        question: usize,
    ) -> Result<&mut Question, EditError> {
        self.current_round_mut()
            .categories
            .get_mut(category)
            .ok_or(EditError::CategoryNotFound)?
            .questions
            .get_mut(question)
            .ok_or(EditError::QuestionNotFound)
    }

    /// Renames a category of the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist.
    pub fn set_category_title(&mut self, category: usize, title: &str) -> Result<(), EditError> {
        let target = self
            .current_round_mut()
            .categories
            .get_mut(category)
            .ok_or(EditError::CategoryNotFound)?;
        target.title = title.to_string();
        Ok(())
    }

    /// Edits one field of a question in the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if the category or question does not exist.
    pub fn set_question_field(
        &mut self,
        category: usize,
        question: usize,
        field: QuestionField<'_>,
    ) -> Result<(), EditError> {
        let target = self.edited_question(category, question)?;
        match field {
            QuestionField::Points(points) => target.points = coerce_points(points),
            QuestionField::Prompt(prompt) => target.prompt = prompt.to_string(),
            QuestionField::Answer(answer) => target.answer = answer.to_string(),
        }
        Ok(())
    }

    /// Appends a category with empty questions on the point ladder to the
    /// current round.
    ///
    /// Returns the index of the new category.
    pub fn add_category(&mut self) -> usize {
        let category = Category::with_ladder(
            self.options.new_category_title,
            &self.options.point_ladder,
        );
        let round = self.current_round_mut();
        round.categories.push(category);
        round.categories.len() - 1
    }

    /// Deletes a category of the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if a question is open or the category does not exist.
    pub fn delete_category(&mut self, category: usize) -> Result<Category, EditError> {
        if self.state != GameState::Idle {
            return Err(EditError::QuestionOpen);
        }

        let round = self.current_round_mut();
        if category >= round.categories.len() {
            return Err(EditError::CategoryNotFound);
        }

        let removed = round.categories.remove(category);
        debug!("deleted category {:?}", removed.title);
        Ok(removed)
    }
}
