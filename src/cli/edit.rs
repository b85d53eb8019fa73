//! Commands that author quiz files.
//!
//! Each command loads the quiz, edits it in memory, and saves it back.

use std::path::{Path, PathBuf};

use clap::Parser;
use quizmaster::{storage, Question, Quiz, DEFAULT_TIMEOUT};
use tracing::instrument;

use super::{load_quiz, parse_question_number, terminal::Colorize};

fn save_quiz(path: &Path, quiz: &Quiz) -> anyhow::Result<()> {
    storage::save(path, quiz).map_err(|e| anyhow::anyhow!("Failed to save quiz: {e}"))
}

/// Split comma-separated answers, trimming surrounding whitespace and dropping
/// empty entries.
fn clean_answers(answers: Vec<String>) -> Vec<String> {
    answers
        .into_iter()
        .map(|answer| answer.trim().to_string())
        .filter(|answer| !answer.is_empty())
        .collect()
}

#[derive(Debug, Parser)]
pub struct New {
    /// Where to create the quiz file (path to .json)
    path: PathBuf,

    /// The title of the quiz
    #[arg(short, long)]
    title: String,

    /// Overwrite the file if it already exists
    #[arg(long)]
    force: bool,
}

impl New {
    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        if self.path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.path.display()
            );
        }

        let quiz = Quiz::new(self.title, Vec::new());
        save_quiz(&self.path, &quiz)?;

        println!(
            "{}",
            format!("Created quiz '{}' at {}", quiz.title(), self.path.display()).success()
        );
        println!();
        println!("Next steps:");
        println!(
            "  quiz add {} -q \"Your question\" -c \"Correct answer\" -w \"Wrong,Answers\"",
            self.path.display()
        );
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Add {
    /// The quiz file to add a question to
    path: PathBuf,

    /// The question text
    #[arg(short, long)]
    question: String,

    /// The correct answer
    #[arg(short, long)]
    correct: String,

    /// The wrong answers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    wrong: Vec<String>,

    /// Advisory time limit in seconds
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TIMEOUT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    timeout: u32,
}

impl Add {
    /// The question described by the command line arguments.
    pub fn question(&self) -> Question {
        Question::new(
            self.question.trim(),
            self.correct.trim(),
            clean_answers(self.wrong.clone()),
        )
        .with_timeout(self.timeout)
    }

    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        let mut quiz = load_quiz(&self.path)?;
        let question = self.question();

        if question
            .wrong_answers()
            .iter()
            .any(|wrong| wrong == question.correct_answer())
        {
            tracing::warn!("The correct answer is also listed as a wrong answer");
        }

        quiz.push_question(question);
        save_quiz(&self.path, &quiz)?;

        println!(
            "{}",
            format!("Added question {} to '{}'", quiz.len(), quiz.title()).success()
        );
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Edit {
    /// The quiz file to edit
    path: PathBuf,

    /// The number of the question to change (starting at 1)
    #[arg(value_parser = parse_question_number)]
    number: usize,

    /// The new question text
    #[arg(short, long)]
    question: Option<String>,

    /// The new correct answer
    #[arg(short, long)]
    correct: Option<String>,

    /// The new wrong answers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    wrong: Option<Vec<String>>,

    /// The new advisory time limit in seconds
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    timeout: Option<u32>,
}

impl Edit {
    /// Apply the requested changes on top of an existing question.
    fn apply(&self, existing: &Question) -> Question {
        let prompt = self
            .question
            .as_deref()
            .map_or(existing.prompt(), str::trim);
        let correct = self
            .correct
            .as_deref()
            .map_or(existing.correct_answer(), str::trim);
        let wrong = self
            .wrong
            .clone()
            .map_or_else(|| existing.wrong_answers().to_vec(), clean_answers);
        let timeout = self.timeout.unwrap_or_else(|| existing.timeout());

        Question::new(prompt, correct, wrong).with_timeout(timeout)
    }

    const fn has_changes(&self) -> bool {
        self.question.is_some()
            || self.correct.is_some()
            || self.wrong.is_some()
            || self.timeout.is_some()
    }

    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        if !self.has_changes() {
            anyhow::bail!(
                "Nothing to change: pass at least one of --question, --correct, --wrong or \
                 --timeout"
            );
        }

        let mut quiz = load_quiz(&self.path)?;
        let index = self.number - 1;

        let existing = quiz
            .question(index)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "'{}' has no question {} (it has {})",
                    quiz.title(),
                    self.number,
                    quiz.len()
                )
            })?;
        let updated = self.apply(existing);

        quiz.replace_question(index, updated)?;
        save_quiz(&self.path, &quiz)?;

        println!(
            "{}",
            format!("Updated question {} of '{}'", self.number, quiz.title()).success()
        );
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Remove {
    /// The quiz file to edit
    path: PathBuf,

    /// The number of the question to delete (starting at 1)
    #[arg(value_parser = parse_question_number)]
    number: usize,
}

impl Remove {
    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        let mut quiz = load_quiz(&self.path)?;

        let removed = quiz.remove_question(self.number - 1).map_err(|_| {
            anyhow::anyhow!(
                "'{}' has no question {} (it has {})",
                quiz.title(),
                self.number,
                quiz.len()
            )
        })?;
        save_quiz(&self.path, &quiz)?;

        println!(
            "{}",
            format!("Deleted question {}: {}", self.number, removed.prompt()).success()
        );
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Title {
    /// The quiz file to rename
    path: PathBuf,

    /// The new title
    title: String,
}

impl Title {
    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        let mut quiz = load_quiz(&self.path)?;
        let old = quiz.title().to_string();

        quiz.set_title(self.title);
        save_quiz(&self.path, &quiz)?;

        println!(
            "{}",
            format!("Renamed '{old}' to '{}'", quiz.title()).success()
        );
        Ok(())
    }
}
