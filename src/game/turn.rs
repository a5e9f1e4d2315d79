use log::{debug, warn};

use crate::board::QuestionRef;
use crate::cue::Cue;
use crate::error::TurnError;
use crate::player::PlayerId;
use crate::result::{ScoreResult, Verdict};

use super::{Game, GameState};

impl Game {
    fn ensure_state(&self, expected: GameState, action: &str) -> Result<(), TurnError> {
        if self.state == expected {
            Ok(())
        } else {
            warn!("{action} rejected in state {:?}", self.state);
            Err(TurnError::InvalidState)
        }
    }

    /// Opens a question of the current round.
    ///
    /// The active player becomes the answering player.
    ///
    /// # Errors
    ///
    /// Returns an error if another question is open, the category or
    /// question does not exist in the current round, or the question has
    /// already been played.
    pub fn open_question(&mut self, category: usize, question: usize) -> Result<(), TurnError> {
        self.open_question_at(QuestionRef {
            round: self.current_round,
            category,
            question,
        })
    }

    /// Opens the question at a board location.
    ///
    /// # Errors
    ///
    /// Same as [`Game::open_question`], and additionally fails with
    /// [`TurnError::WrongRound`] if `at` is not in the current round.
    pub fn open_question_at(&mut self, at: QuestionRef) -> Result<(), TurnError> {
        self.ensure_state(GameState::Idle, "open")?;

        if at.round != self.current_round {
            warn!("question {at} is not in round {}", self.current_round);
            return Err(TurnError::WrongRound);
        }

        let target = self
            .current_round()
            .categories
            .get(at.category)
            .ok_or(TurnError::CategoryNotFound)?
            .questions
            .get(at.question)
            .ok_or(TurnError::QuestionNotFound)?;

        if target.answered {
            warn!("question {at} has already been played");
            return Err(TurnError::AlreadyAnswered);
        }

        self.open = Some(at);
        self.turn.answering = self.turn.active;
        self.state = GameState::Deciding;
        debug!("opened question {at}");
        self.emit(Cue::ThinkingStart);

        Ok(())
    }

    /// Shows the answer of the open question.
    ///
    /// # Errors
    ///
    /// Returns an error if no question is waiting for a decision.
    pub fn reveal(&mut self) -> Result<(), TurnError> {
        self.ensure_state(GameState::Deciding, "reveal")?;

        self.state = GameState::Revealed;
        self.emit(Cue::ThinkingStop);

        Ok(())
    }

    /// Passes the open question to the next player in seating order.
    ///
    /// Returns the ID of the new answering player.
    ///
    /// # Errors
    ///
    /// Returns an error if no question is waiting for a decision or there
    /// are no players.
    pub fn pass(&mut self) -> Result<PlayerId, TurnError> {
        self.ensure_state(GameState::Deciding, "pass")?;

        if self.players.is_empty() {
            return Err(TurnError::NoPlayers);
        }

        self.turn.answering = (self.turn.answering + 1) % self.players.len();
        let next = self.players[self.turn.answering].id();
        debug!("question passed to player {next}");

        Ok(next)
    }

    /// Judges the revealed answer and settles the question.
    ///
    /// A correct answer adds the question's points to the answering player
    /// and hands them the turn. A wrong answer subtracts the points and
    /// leaves the turn where it was. Either way the question is played.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer has not been revealed or there are no
    /// players. Nothing changes in either case.
    pub fn score(&mut self, correct: bool) -> Result<ScoreResult, TurnError> {
        self.ensure_state(GameState::Revealed, "score")?;

        if self.players.is_empty() {
            debug!("score ignored: no players");
            return Err(TurnError::NoPlayers);
        }

        let at = self.open.ok_or(TurnError::InvalidState)?;
        let points = self
            .question_mut(at)
            .map(|question| question.points)
            .ok_or(TurnError::QuestionNotFound)?;

        let index = self.turn.answering;
        let verdict = Verdict::from(correct);
        let player = self.players.get_mut(index).ok_or(TurnError::NoPlayers)?;

        let delta = match verdict {
            Verdict::Correct => {
                player.award(points);
                i64::from(points)
            }
            Verdict::Wrong => {
                player.deduct(points);
                -i64::from(points)
            }
        };
        let (player_id, score) = (player.id(), player.score());

        let turn_passed = verdict == Verdict::Correct && self.turn.active != index;
        if verdict == Verdict::Correct {
            self.turn.active = index;
        }

        self.consume(at);
        debug!("question {at} scored {verdict:?} for player {player_id}");

        match verdict {
            Verdict::Correct => {
                self.emit(Cue::Correct);
                self.emit(Cue::Celebrate);
            }
            Verdict::Wrong => self.emit(Cue::Wrong),
        }

        Ok(ScoreResult {
            question: at,
            player_id,
            player_index: index,
            verdict,
            points,
            delta,
            score,
            turn_passed,
        })
    }

    /// Closes the open question without scoring it.
    ///
    /// The question still counts as played. Returns its location.
    ///
    /// # Errors
    ///
    /// Returns an error if no question is open.
    pub fn dismiss(&mut self) -> Result<QuestionRef, TurnError> {
        let Some(at) = self.open else {
            warn!("dismiss rejected: no open question");
            return Err(TurnError::InvalidState);
        };

        let was_deciding = self.state == GameState::Deciding;
        self.consume(at);
        debug!("question {at} dismissed");

        if was_deciding {
            self.emit(Cue::ThinkingStop);
        }

        Ok(at)
    }

    /// Marks the question as played and returns to `Idle`.
    fn consume(&mut self, at: QuestionRef) {
        if let Some(question) = self.question_mut(at) {
            question.answered = true;
        }
        self.open = None;
        self.state = GameState::Idle;
    }
}
