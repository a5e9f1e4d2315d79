//! A trivia board game engine with optional `no_std` support.
//!
//! The crate parses a plain-text question file into rounds of categories
//! and provides a [`Game`] type that drives the question flow: opening a
//! cell, passing, revealing, scoring, and switching rounds.
//!
//! # Example
//!
//! ```
//! use quizboard::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.load_text("Тема 1. Наука\n100. Вопрос про науку\nОтвет: 42").unwrap();
//!
//! game.open_question(0, 0).unwrap();
//! game.reveal().unwrap();
//! let result = game.score(true).unwrap();
//!
//! assert_eq!(result.score, 100);
//! assert_eq!(game.state(), GameState::Idle);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod cue;
pub mod error;
pub mod export;
pub mod game;
pub mod options;
pub mod parser;
pub mod player;
pub mod result;

// Re-export main types
pub use board::{BOARD_ROWS, Category, MISSING_ANSWER, Question, QuestionRef, Round, RoundLabel};
pub use cue::{Cue, CueSink};
pub use error::{EditError, ParseError, PlayerError, RoundError, TurnError};
pub use game::{Game, GameState, PlayerField, QuestionField, Turn};
pub use options::GameOptions;
pub use player::{Player, PlayerId};
pub use result::{ScoreResult, Verdict};
