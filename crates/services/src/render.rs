use chrono::NaiveDate;
use trivia_core::GameError;
use trivia_core::model::GameSummary;

use crate::error::{FetchError, SessionError};

/// Coarse lifecycle position of a session, for enabling controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    AwaitingAnswer,
    Resolved,
    Finished,
}

/// Response to the player's last action on the current question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Wrong,
    TimedOut {
        answer: String,
    },
    EmptyInput,
}

/// Why the last start attempt returned to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartFailure {
    Unreachable,
    InvalidEndpoint,
    BadStatus(u16),
    Malformed,
    NotEnoughClues { got: usize },
}

impl StartFailure {
    /// Returns `None` for errors that are not start failures.
    #[must_use]
    pub fn from_error(err: &SessionError) -> Option<Self> {
        match err {
            SessionError::Fetch(fetch) => Some(match fetch {
                FetchError::InvalidEndpoint(_) => Self::InvalidEndpoint,
                FetchError::Network(_) => Self::Unreachable,
                FetchError::BadStatus(status) => Self::BadStatus(status.as_u16()),
                FetchError::Decode(_) => Self::Malformed,
            }),
            SessionError::Game(GameError::NotEnoughClues { got, .. }) => {
                Some(Self::NotEnoughClues { got: *got })
            }
            _ => None,
        }
    }
}

/// Read-only snapshot of everything a presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub phase: SessionPhase,
    /// 1-based.
    pub question_number: Option<usize>,
    pub total_questions: usize,
    pub category: Option<String>,
    pub question: Option<String>,
    pub value: Option<u32>,
    pub aired_on: Option<NaiveDate>,
    pub seconds_left: Option<u32>,
    pub urgent: bool,
    pub score: u32,
    pub feedback: Feedback,
    pub summary: Option<GameSummary>,
    pub failure: Option<StartFailure>,
}

impl RenderState {
    #[must_use]
    pub fn can_start(&self) -> bool {
        matches!(self.phase, SessionPhase::Idle | SessionPhase::Finished)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == SessionPhase::AwaitingAnswer
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::AwaitingAnswer | SessionPhase::Resolved
        )
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }
}
