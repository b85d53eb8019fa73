use serde::{Deserialize, Serialize};

/// The number of seconds a question may be displayed for, when a quiz file
/// does not say otherwise.
pub const DEFAULT_TIMEOUT: u32 = 10;

/// A multiple-choice question.
///
/// A question has exactly one correct answer and zero or more distractors
/// ("wrong answers"). The correct answer is expected not to appear among the
/// wrong answers, but this is not enforced.
///
/// The serialized field names are part of the on-disk quiz format and must not
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question")]
    prompt: String,
    correct_answer: String,
    wrong_answers: Vec<String>,
    #[serde(default = "default_timeout")]
    timeout: u32,
}

impl Question {
    /// Creates a new question with the default timeout.
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        wrong_answers: Vec<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            wrong_answers,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the advisory display timeout, in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = timeout;
        self
    }

    /// The question text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The single correct answer.
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// The distractors, in authoring order.
    #[must_use]
    pub fn wrong_answers(&self) -> &[String] {
        &self.wrong_answers
    }

    /// Advisory display timeout in seconds.
    ///
    /// Nothing in this crate enforces it.
    #[must_use]
    pub const fn timeout(&self) -> u32 {
        self.timeout
    }

    /// All answers, correct answer first, then the wrong answers in order.
    pub fn answers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.correct_answer.as_str())
            .chain(self.wrong_answers.iter().map(String::as_str))
    }

    /// The total number of answers (correct plus wrong).
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.wrong_answers.len() + 1
    }
}

const fn default_timeout() -> u32 {
    DEFAULT_TIMEOUT
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn answers_put_correct_answer_first() {
        let question = Question::new(
            "Capital of Italy?",
            "Rome",
            vec!["Paris".to_string(), "Berlin".to_string()],
        );

        let answers: Vec<_> = question.answers().collect();
        assert_eq!(answers, ["Rome", "Paris", "Berlin"]);
        assert_eq!(question.answer_count(), 3);
    }

    #[test]
    fn deserializing_without_timeout_uses_default() {
        let question: Question = serde_json::from_value(json!({
            "question": "2 + 2?",
            "correctAnswer": "4",
            "wrongAnswers": ["3", "5"]
        }))
        .unwrap();

        assert_eq!(question.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(question.prompt(), "2 + 2?");
    }

    #[test]
    fn serializes_with_fixed_keys() {
        let question = Question::new("Q", "A", vec!["B".to_string()]).with_timeout(30);

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(
            value,
            json!({
                "question": "Q",
                "correctAnswer": "A",
                "wrongAnswers": ["B"],
                "timeout": 30
            })
        );
    }

    #[test]
    fn missing_required_key_is_rejected() {
        let result: Result<Question, _> = serde_json::from_value(json!({
            "question": "Q",
            "wrongAnswers": []
        }));

        assert!(result.is_err());
    }

    #[test]
    fn empty_wrong_answers_leave_a_single_answer() {
        let question = Question::new("Q", "A", Vec::new());
        assert_eq!(question.answers().collect::<Vec<_>>(), ["A"]);
    }
}
