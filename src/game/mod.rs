//! Game session and state management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Question, QuestionRef, Round, RoundLabel};
use crate::cue::{Cue, CueSink};
use crate::error::{ParseError, RoundError};
use crate::export;
use crate::options::GameOptions;
use crate::parser;
use crate::player::{Player, PlayerId};

mod editor;
mod roster;
pub mod state;
mod turn;

pub use editor::QuestionField;
pub use roster::PlayerField;
pub use state::{GameState, Turn};

/// A trivia game session that owns the board, the players, and the turn.
///
/// One instance exists per running session. Hosts drive it through command
/// methods and re-render from its getters after every command; sound and
/// visual effects are requested through an optional [`CueSink`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Rounds on the board. Never empty.
    rounds: Vec<Round>,
    /// Index of the round currently shown.
    current_round: usize,
    /// Players in seating order.
    players: Vec<Player>,
    /// Next player ID to assign.
    next_id: u32,
    /// Current turn position.
    turn: Turn,
    /// Current question flow state.
    state: GameState,
    /// The open question, present exactly when the state is not `Idle`.
    open: Option<QuestionRef>,
    /// Receiver for cue notifications.
    cues: Option<Box<dyn CueSink>>,
    /// Random number generator for avatar seeds.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a placeholder board and the configured number
    /// of players.
    ///
    /// # Example
    ///
    /// ```
    /// use quizboard::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.player_count(), 2);
    /// assert_eq!(game.round_count(), 1);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rounds = alloc::vec![Round::placeholder(&options.point_ladder)];
        let initial_players = options.initial_players;

        let mut game = Self {
            options,
            rounds,
            current_round: 0,
            players: Vec::new(),
            next_id: 0,
            turn: Turn::default(),
            state: GameState::Idle,
            open: None,
            cues: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        for _ in 0..initial_players {
            game.add_player();
        }

        game
    }

    /// Installs the receiver for cue notifications.
    pub fn set_cue_sink(&mut self, sink: impl CueSink + 'static) {
        self.cues = Some(Box::new(sink));
    }

    /// Removes the cue receiver.
    pub fn clear_cue_sink(&mut self) {
        self.cues = None;
    }

    fn emit(&mut self, cue: Cue) {
        if let Some(sink) = self.cues.as_mut() {
            sink.cue(cue);
        }
    }

    /// Parses question text and replaces the board with it.
    ///
    /// Any open question is discarded and the first round is shown. On
    /// failure the game is left unchanged.
    ///
    /// Returns the number of rounds loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoRoundsFound`] if the text holds no categories.
    pub fn load_text(&mut self, text: &str) -> Result<usize, ParseError> {
        let rounds = parser::parse(text)?;
        self.load_rounds(rounds)
    }

    /// Replaces the board with the given rounds.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoRoundsFound`] if `rounds` is empty.
    pub fn load_rounds(&mut self, rounds: Vec<Round>) -> Result<usize, ParseError> {
        if rounds.is_empty() {
            return Err(ParseError::NoRoundsFound);
        }

        self.discard_open_question();
        self.rounds = rounds;
        self.current_round = 0;
        info!("loaded {} round(s)", self.rounds.len());
        Ok(self.rounds.len())
    }

    /// Serializes the board into the question text format.
    #[must_use]
    pub fn export_text(&self) -> String {
        export::serialize(&self.rounds)
    }

    /// Shows another round.
    ///
    /// Player and turn state are kept. An open question is closed without
    /// being consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn switch_round(&mut self, index: usize) -> Result<(), RoundError> {
        if index >= self.rounds.len() {
            return Err(RoundError::RoundNotFound);
        }

        self.discard_open_question();
        self.current_round = index;
        debug!("switched to round {index}");
        Ok(())
    }

    /// Restores the board and players to their starting condition.
    ///
    /// Every question becomes unplayed, scores and statistics are cleared,
    /// the turn returns to the first player, and the first round is shown.
    /// Names, avatars, and board content are kept.
    pub fn reset(&mut self) {
        self.discard_open_question();

        for round in &mut self.rounds {
            for category in &mut round.categories {
                for question in &mut category.questions {
                    question.answered = false;
                }
            }
        }
        for player in &mut self.players {
            player.reset_stats();
        }

        self.turn = Turn::default();
        self.current_round = 0;
        info!("game reset");
    }

    /// Returns to `Idle` without marking the open question as played.
    fn discard_open_question(&mut self) {
        let previous = self.state;
        self.open = None;
        self.state = GameState::Idle;
        if previous == GameState::Deciding {
            self.emit(Cue::ThinkingStop);
        }
    }

    fn question_mut(&mut self, at: QuestionRef) -> Option<&mut Question> {
        self.rounds
            .get_mut(at.round)
            .and_then(|round| round.categories.get_mut(at.category))
            .and_then(|category| category.questions.get_mut(at.question))
    }

    fn current_round_mut(&mut self) -> &mut Round {
        &mut self.rounds[self.current_round]
    }

    /// Returns all rounds.
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Returns the number of rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Returns the index of the round currently shown.
    #[must_use]
    pub const fn current_round_index(&self) -> usize {
        self.current_round
    }

    /// Returns the round currently shown.
    #[must_use]
    pub fn current_round(&self) -> &Round {
        &self.rounds[self.current_round]
    }

    /// Returns the tab labels of all rounds in order.
    pub fn round_labels(&self) -> impl Iterator<Item = RoundLabel> {
        let count = self.rounds.len();
        (0..count).map(move |index| RoundLabel::for_index(index, count))
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current turn position.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the location of the open question.
    #[must_use]
    pub const fn open_question_ref(&self) -> Option<QuestionRef> {
        self.open
    }

    /// Returns the open question.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let at = self.open?;
        self.rounds
            .get(at.round)
            .and_then(|round| round.categories.get(at.category))
            .and_then(|category| category.questions.get(at.question))
    }

    /// Returns the title of the open question's category.
    #[must_use]
    pub fn open_category_title(&self) -> Option<&str> {
        let at = self.open?;
        self.rounds
            .get(at.round)
            .and_then(|round| round.categories.get(at.category))
            .map(|category| category.title.as_str())
    }

    /// Returns the players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.turn.active)
    }

    /// Returns the player currently answering the open question.
    ///
    /// Returns `None` when no question is open.
    #[must_use]
    pub fn answering_player(&self) -> Option<&Player> {
        if self.open.is_none() {
            return None;
        }
        self.players.get(self.turn.answering)
    }
}
