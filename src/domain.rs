//! Domain models for quizzes.
//!
//! This module contains the quiz record types and the library configuration.
//! None of these types know about the filesystem.

/// Multiple-choice question records.
pub mod question;
pub use question::{Question, DEFAULT_TIMEOUT};

/// Quizzes: titled, ordered question lists.
pub mod quiz;
pub use quiz::{IndexError, Quiz};

mod config;
pub use config::Config;
