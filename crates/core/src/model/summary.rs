use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many questions for a single game: {len}")]
    TooManyQuestions { len: usize },
}

/// How a single question ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    Correct,
    TimedOut,
    /// Advanced past without a correct answer and before the clock ran out.
    Skipped,
}

/// Aggregate result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_questions: u32,
    correct: u32,
    timed_out: u32,
    skipped: u32,
}

impl GameSummary {
    /// Build a summary from per-question outcomes.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SummaryError::TooManyQuestions` if the outcome count cannot fit in `u32`.
    pub fn from_outcomes(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        outcomes: &[QuestionOutcome],
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let total_questions = u32::try_from(outcomes.len())
            .map_err(|_| SummaryError::TooManyQuestions { len: outcomes.len() })?;

        let mut correct = 0_u32;
        let mut timed_out = 0_u32;
        let mut skipped = 0_u32;
        for outcome in outcomes {
            match outcome {
                QuestionOutcome::Correct => correct = correct.saturating_add(1),
                QuestionOutcome::TimedOut => timed_out = timed_out.saturating_add(1),
                QuestionOutcome::Skipped => skipped = skipped.saturating_add(1),
            }
        }

        Ok(Self {
            started_at,
            completed_at,
            total_questions,
            correct,
            timed_out,
            skipped,
        })
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }

    /// Final score. One point per correctly answered question.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn timed_out(&self) -> u32 {
        self.timed_out
    }

    #[must_use]
    pub fn skipped(&self) -> u32 {
        self.skipped
    }
}
