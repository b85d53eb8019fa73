//! The JSON quiz file format.
//!
//! A quiz file is a single JSON object:
//!
//! ```json
//! {
//!   "title": "Geography",
//!   "listOfQuestions": [
//!     {
//!       "question": "Capital of Italy?",
//!       "correctAnswer": "Rome",
//!       "wrongAnswers": ["Paris", "Berlin"],
//!       "timeout": 10
//!     }
//!   ]
//! }
//! ```
//!
//! `timeout` is optional on read and always written.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::{Question, Quiz};

/// A quiz as read from disk.
#[derive(Debug, Deserialize)]
struct QuizFile {
    title: String,
    #[serde(rename = "listOfQuestions")]
    questions: Vec<Question>,
}

/// A borrowed view of a quiz, for writing without cloning.
#[derive(Debug, Serialize)]
struct QuizFileRef<'a> {
    title: &'a str,
    #[serde(rename = "listOfQuestions")]
    questions: &'a [Question],
}

impl From<QuizFile> for Quiz {
    fn from(file: QuizFile) -> Self {
        let QuizFile { title, questions } = file;
        Self::new(title, questions)
    }
}

impl<'a> From<&'a Quiz> for QuizFileRef<'a> {
    fn from(quiz: &'a Quiz) -> Self {
        Self {
            title: quiz.title(),
            questions: quiz.questions(),
        }
    }
}

/// Reads a quiz from the JSON file at `path`.
///
/// Answer uniqueness is not validated.
///
/// # Errors
///
/// This function can fail if:
///
/// - the file does not exist ([`LoadError::NotFound`])
/// - the file cannot be read ([`LoadError::Io`])
/// - the content is not valid JSON, or a required key is missing or has the
///   wrong type ([`LoadError::Format`])
pub fn load(path: &Path) -> Result<Quiz, LoadError> {
    let file = File::open(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(io_error),
    })?;

    let reader = BufReader::new(file);
    let quiz_file: QuizFile =
        serde_json::from_reader(reader).map_err(|source| match source.classify() {
            serde_json::error::Category::Io => LoadError::Io(source.into()),
            _ => LoadError::Format {
                path: path.to_path_buf(),
                source,
            },
        })?;

    tracing::debug!(
        "Loaded quiz '{}' ({} questions) from {}",
        quiz_file.title,
        quiz_file.questions.len(),
        path.display()
    );

    Ok(quiz_file.into())
}

/// Writes a quiz to `path` as pretty-printed JSON.
///
/// Parent directories are created automatically if they don't exist. An
/// existing file is overwritten. The write is not atomic: if the process dies
/// part way through, the file may be left truncated.
///
/// # Errors
///
/// Returns a [`SaveError`] if a directory cannot be created or the file cannot
/// be written to.
pub fn save(path: &Path, quiz: &Quiz) -> Result<(), SaveError> {
    write_file(path, quiz).map_err(|source| SaveError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved quiz '{}' to {}", quiz.title(), path.display());
    Ok(())
}

/// Renders a quiz as pretty-printed JSON in the on-disk quiz file format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_string_pretty(quiz: &Quiz) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&QuizFileRef::from(quiz))
}

fn write_file(path: &Path, quiz: &Quiz) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &QuizFileRef::from(quiz))?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Errors that can occur when loading a quiz file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The quiz file does not exist.
    #[error("quiz file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The quiz file exists but could not be read.
    #[error("failed to read quiz file")]
    Io(#[from] io::Error),
    /// The quiz file is not a valid quiz.
    #[error("invalid quiz file {}: {source}", path.display())]
    Format {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// A quiz file could not be written.
#[derive(Debug, thiserror::Error)]
#[error("failed to write quiz file {}", path.display())]
pub struct SaveError {
    /// The file that could not be written.
    pub path: PathBuf,
    /// The underlying I/O error.
    pub source: io::Error,
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn geo() -> Quiz {
        Quiz::new(
            "Geo",
            vec![
                Question::new(
                    "Capital of Italy?",
                    "Rome",
                    vec!["Paris".to_string(), "Berlin".to_string()],
                ),
                Question::new("Longest river?", "Nile", vec!["Amazon".to_string()])
                    .with_timeout(25),
                Question::new("Is the Earth round?", "Yes", Vec::new()),
            ],
        )
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("geo.json");

        save(&path, &geo()).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, geo());
    }

    #[test]
    fn save_creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("europe/capitals/geo.json");

        save(&path, &geo()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quiz.json");

        save(&path, &geo()).unwrap();
        let replacement = Quiz::new("Empty", Vec::new());
        save(&path, &replacement).unwrap();

        assert_eq!(load(&path).unwrap(), replacement);
    }

    #[test]
    fn save_writes_expected_shape() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quiz.json");

        let quiz = Quiz::new(
            "Maths",
            vec![Question::new("1 + 1?", "2", vec!["3".to_string()])],
        );
        save(&path, &quiz).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Maths",
                "listOfQuestions": [{
                    "question": "1 + 1?",
                    "correctAnswer": "2",
                    "wrongAnswers": ["3"],
                    "timeout": 10
                }]
            })
        );
    }

    #[test]
    fn load_defaults_missing_timeout() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quiz.json");
        std::fs::write(
            &path,
            r#"{
                "title": "Geo",
                "listOfQuestions": [
                    {"question": "Capital of Italy?", "correctAnswer": "Rome", "wrongAnswers": ["Paris", "Berlin"]}
                ]
            }"#,
        )
        .unwrap();

        let quiz = load(&path).unwrap();

        assert_eq!(quiz.title(), "Geo");
        assert_eq!(quiz.questions()[0].timeout(), 10);
        assert_eq!(quiz.questions()[0].wrong_answers(), ["Paris", "Berlin"]);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.json");

        let error = load(&path).unwrap_err();

        assert!(matches!(error, LoadError::NotFound(p) if p == path));
    }

    #[test]
    fn load_invalid_json_is_format_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let error = load(&path).unwrap_err();

        assert!(matches!(error, LoadError::Format { .. }));
    }

    #[test]
    fn load_missing_required_key_is_format_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("untitled.json");
        std::fs::write(&path, r#"{"listOfQuestions": []}"#).unwrap();

        let error = load(&path).unwrap_err();

        assert!(matches!(error, LoadError::Format { .. }));
    }

    #[test]
    fn load_does_not_validate_answer_uniqueness() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dupes.json");
        std::fs::write(
            &path,
            r#"{"title": "Dupes", "listOfQuestions": [
                {"question": "Q", "correctAnswer": "A", "wrongAnswers": ["A", "B"]}
            ]}"#,
        )
        .unwrap();

        let quiz = load(&path).unwrap();

        assert_eq!(quiz.questions()[0].wrong_answers(), ["A", "B"]);
    }

    #[test]
    fn rendered_json_can_be_saved_as_a_quiz_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("copy.json");

        let rendered = to_string_pretty(&geo()).unwrap();
        assert!(rendered.contains("\"listOfQuestions\""));
        std::fs::write(&path, rendered).unwrap();

        assert_eq!(load(&path).unwrap(), geo());
    }

    #[test]
    fn save_into_a_file_path_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("quiz.json");

        let error = save(&path, &geo()).unwrap_err();

        assert_eq!(error.path, path);
    }
}
