//! Question/answer pairs and answer normalization

/// Lowercase and trim surrounding whitespace.
///
/// Idempotent, so a normalized reference answer can be compared with any freshly
/// normalized user answer.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// A single question with its normalized answer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Problem {
    question: String,
    answer: String,
}

impl Problem {
    /// Create a problem, normalizing the reference answer
    pub fn new(question: impl Into<String>, answer: impl AsRef<str>) -> Self {
        Self {
            question: question.into(),
            answer: normalize(answer.as_ref()),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check a raw user answer against the reference answer
    pub fn is_correct(&self, raw: &str) -> bool {
        normalize(raw) == self.answer
    }
}
