use serde::{Deserialize, Serialize};

use super::clue::Clue;

/// The clues returned by one fetch, in API order.
///
/// The API promises 100 entries; the count is not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueBatch {
    clues: Vec<Clue>,
}

impl ClueBatch {
    #[must_use]
    pub fn new(clues: Vec<Clue>) -> Self {
        Self { clues }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    #[must_use]
    pub fn into_clues(self) -> Vec<Clue> {
        self.clues
    }
}

impl From<Vec<Clue>> for ClueBatch {
    fn from(clues: Vec<Clue>) -> Self {
        Self::new(clues)
    }
}
