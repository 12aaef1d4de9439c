use thiserror::Error;

use crate::model::{AnswerError, SummaryError};

/// Errors emitted by `TriviaGame` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("need at least {needed} clues to play, got {got}")]
    NotEnoughClues { needed: usize, got: usize },

    #[error("no question is waiting for an answer")]
    NotPlaying,

    #[error("this question has already been answered")]
    AlreadyResolved,

    #[error("please enter an answer, or press Next to skip")]
    EmptyInput,

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl From<AnswerError> for GameError {
    fn from(err: AnswerError) -> Self {
        match err {
            AnswerError::Empty => Self::EmptyInput,
        }
    }
}
