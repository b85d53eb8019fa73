use crate::domain::Question;

/// A titled, ordered collection of questions.
///
/// The order of questions is significant: it is the order in which they are
/// stored on disk and the order in which they are played.
///
/// A `Quiz` is also the editing surface for authoring tools. It owns its
/// question list, so any editor simply holds a `Quiz` and calls the methods
/// below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// Creates a quiz from a title and a list of questions.
    #[must_use]
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// The quiz title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the quiz title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The questions, in play order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question at `index` (0-based), if any.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if the quiz has no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Appends a question to the end of the quiz.
    pub fn push_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Replaces the question at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if `index` is out of bounds. The quiz is left
    /// unchanged.
    pub fn replace_question(
        &mut self,
        index: usize,
        question: Question,
    ) -> Result<Question, IndexError> {
        let len = self.questions.len();
        let slot = self
            .questions
            .get_mut(index)
            .ok_or(IndexError { index, len })?;
        Ok(std::mem::replace(slot, question))
    }

    /// Removes the question at `index`, shifting later questions down.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if `index` is out of bounds. The quiz is left
    /// unchanged.
    pub fn remove_question(&mut self, index: usize) -> Result<Question, IndexError> {
        if index >= self.questions.len() {
            return Err(IndexError {
                index,
                len: self.questions.len(),
            });
        }
        Ok(self.questions.remove(index))
    }

    /// Consumes the quiz, returning its title and questions.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Question>) {
        (self.title, self.questions)
    }
}

/// A question index was out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("question index {index} is out of range (quiz has {len} questions)")]
pub struct IndexError {
    /// The offending index (0-based).
    pub index: usize,
    /// The number of questions in the quiz.
    pub len: usize,
}
