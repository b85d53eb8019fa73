//! Plain-text multiple-choice quizzes
//!
//! Quizzes are JSON documents stored in a directory. This crate reads and
//! writes them, finds them with an approximate text search, and plays them
//! through one question at a time.
//!
//! - [`domain`]: the [`Quiz`] and [`Question`] records
//! - [`storage`]: loading and saving quiz files, and the [`Library`] of quiz
//!   files below a root directory
//! - [`finder`]: fuzzy matching of search terms against file contents
//! - [`session`]: the [`QuizSession`] state machine for playing a quiz

pub mod domain;
pub use domain::{Config, IndexError, Question, Quiz, DEFAULT_TIMEOUT};

/// Filesystem storage for quizzes.
pub mod storage;
pub use storage::{Entry, Library, LoadError, SaveError};

pub mod finder;
pub use finder::Finder;

pub mod session;
pub use session::{Outcome, QuizSession, SessionError, SessionState, StateError};
