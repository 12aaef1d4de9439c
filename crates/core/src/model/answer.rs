use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("answer is empty")]
    Empty,
}

/// Trim surrounding whitespace and case-fold.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A non-blank, normalized answer typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(String);

impl Guess {
    /// # Errors
    ///
    /// Returns `AnswerError::Empty` if `raw` is empty or only whitespace.
    pub fn parse(raw: &str) -> Result<Self, AnswerError> {
        let normalized = normalize_answer(raw);
        if normalized.is_empty() {
            return Err(AnswerError::Empty);
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the stored answer appears anywhere in the guess.
    ///
    /// Containment, not equality: "what is a book" matches "a book".
    /// No punctuation or article stripping is applied.
    #[must_use]
    pub fn matches(&self, expected: &str) -> bool {
        self.0.contains(&normalize_answer(expected))
    }
}
