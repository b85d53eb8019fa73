//! Playing through a quiz.
//!
//! A [`QuizSession`] walks through the questions of a [`Quiz`] in order. For
//! each question the caller asks for the answers with
//! [`QuizSession::present_current`], which shuffles them, shows them to the
//! user, and then submits the user's 1-based choice with
//! [`QuizSession::submit_answer`].
//!
//! ```
//! use quizmaster::{Question, Quiz, QuizSession, SessionState};
//!
//! let quiz = Quiz::new(
//!     "Geo",
//!     vec![Question::new("Capital of Italy?", "Rome", vec!["Paris".into(), "Berlin".into()])],
//! );
//!
//! let mut session = QuizSession::new(&quiz);
//! let answers = session.present_current()?;
//! let choice = answers.iter().position(|a| *a == "Rome").unwrap() + 1;
//!
//! let outcome = session.submit_answer(choice)?;
//! assert!(outcome.correct);
//! assert_eq!(outcome.state, SessionState::Completed);
//! assert_eq!(session.result(), (1, 1));
//! # Ok::<(), quizmaster::SessionError>(())
//! ```

use std::fmt;

use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

use crate::domain::{Question, Quiz};

/// Whether a session has questions left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// There is a current question waiting for an answer.
    InProgress,
    /// Every question has been answered.
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// The result of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<'q> {
    /// Whether the chosen answer was the correct one.
    pub correct: bool,
    /// The correct answer to the question just answered.
    pub correct_answer: &'q str,
    /// The session state after the submission.
    pub state: SessionState,
}

/// Errors returned by [`QuizSession`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The selection is not one of the presented positions.
    ///
    /// The question is not consumed; the caller should ask again.
    #[error("selection {selection} is out of range, choose between 1 and {count}")]
    InvalidSelection {
        /// The rejected 1-based selection.
        selection: usize,
        /// The number of answers presented.
        count: usize,
    },
    /// The operation is not valid in the current state.
    #[error("{0}")]
    InvalidState(StateError),
}

/// Why an operation was invalid in the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Every question has already been answered.
    #[error("the quiz is already completed")]
    Completed,
    /// An answer was submitted before the answers were presented.
    #[error("the answers to the current question have not been presented")]
    NotPresented,
}

impl From<StateError> for SessionError {
    fn from(error: StateError) -> Self {
        Self::InvalidState(error)
    }
}

/// A single play-through of a quiz.
///
/// The session borrows the quiz and never modifies it. It tracks the current
/// question, the score, and the order in which the current question's answers
/// were last presented, so that a numeric choice can be resolved.
///
/// Answer orderings are drawn from the session's own random number generator.
#[derive(Debug)]
pub struct QuizSession<'q, R = ThreadRng> {
    quiz: &'q Quiz,
    current: usize,
    score: usize,
    presented: Vec<&'q str>,
    rng: R,
}

impl<'q> QuizSession<'q> {
    /// Starts a session using the thread-local random number generator.
    #[must_use]
    pub fn new(quiz: &'q Quiz) -> Self {
        Self::with_rng(quiz, rand::thread_rng())
    }
}

impl<'q, R: Rng> QuizSession<'q, R> {
    /// Starts a session that shuffles answers with the given generator.
    ///
    /// A seeded generator makes answer orderings reproducible.
    pub const fn with_rng(quiz: &'q Quiz, rng: R) -> Self {
        Self {
            quiz,
            current: 0,
            score: 0,
            presented: Vec::new(),
            rng,
        }
    }

    /// The quiz being played.
    #[must_use]
    pub const fn quiz(&self) -> &'q Quiz {
        self.quiz
    }

    /// The current state.
    ///
    /// A session over a quiz with no questions is completed from the start.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.current < self.quiz.len() {
            SessionState::InProgress
        } else {
            SessionState::Completed
        }
    }

    /// Returns `true` once every question has been answered.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state() == SessionState::Completed
    }

    /// The 0-based index of the current question.
    ///
    /// Equal to [`QuizSession::total`] once completed.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The current question, or `None` once completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&'q Question> {
        self.quiz.question(self.current)
    }

    /// The number of correctly answered questions so far.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// The number of questions in the quiz.
    #[must_use]
    pub fn total(&self) -> usize {
        self.quiz.len()
    }

    /// The score and the total number of questions.
    #[must_use]
    pub fn result(&self) -> (usize, usize) {
        (self.score, self.total())
    }

    /// The answers to the current question in the order they were last
    /// presented, or an empty slice if they have not been presented yet.
    #[must_use]
    pub fn last_presented(&self) -> &[&'q str] {
        &self.presented
    }

    /// Shuffles the answers to the current question and returns them.
    ///
    /// Every ordering of the answers is equally likely. The ordering is
    /// remembered so that [`QuizSession::submit_answer`] can resolve a
    /// position. Calling this again for the same question draws a new
    /// ordering, and the old one is forgotten.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidState`] if the session is completed.
    pub fn present_current(&mut self) -> Result<&[&'q str], SessionError> {
        let question = self.current_question().ok_or(StateError::Completed)?;

        self.presented.clear();
        self.presented.extend(question.answers());
        self.presented.shuffle(&mut self.rng);

        Ok(&self.presented)
    }

    /// Submits the answer at `selection`, a 1-based position in the last
    /// presented ordering.
    ///
    /// On success the score is incremented if the answer is correct, and the
    /// session moves on to the next question either way.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidState`] if the session is completed, or the
    ///   answers to the current question have not been presented
    /// - [`SessionError::InvalidSelection`] if `selection` is 0 or larger than
    ///   the number of presented answers. The session is unchanged and the same
    ///   question remains current.
    pub fn submit_answer(&mut self, selection: usize) -> Result<Outcome<'q>, SessionError> {
        let question = self.current_question().ok_or(StateError::Completed)?;

        if self.presented.is_empty() {
            return Err(StateError::NotPresented.into());
        }

        let chosen = selection
            .checked_sub(1)
            .and_then(|index| self.presented.get(index))
            .ok_or(SessionError::InvalidSelection {
                selection,
                count: self.presented.len(),
            })?;

        let correct = *chosen == question.correct_answer();
        if correct {
            self.score += 1;
        }
        self.current += 1;
        self.presented.clear();

        tracing::debug!(
            "Question {}/{} answered {}",
            self.current,
            self.total(),
            if correct { "correctly" } else { "incorrectly" }
        );

        Ok(Outcome {
            correct,
            correct_answer: question.correct_answer(),
            state: self.state(),
        })
    }
}
