use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::GameError;
use crate::model::{Clue, GameSummary, Guess, QuestionOutcome};

/// Questions asked per game, regardless of how many clues were fetched.
pub const QUESTIONS_PER_GAME: usize = 10;

/// Countdown length for each question.
pub const SECONDS_PER_QUESTION: u32 = 45;

/// At or below this many seconds the countdown is shown as urgent.
pub const URGENT_THRESHOLD_SECS: u32 = 10;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Why a question stopped accepting answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Correct,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingAnswer { index: usize, seconds_left: u32 },
    Resolved { index: usize, resolution: Resolution },
    Finished,
}

impl GameState {
    /// Zero-based index of the question on screen, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::AwaitingAnswer { index, .. } | Self::Resolved { index, .. } => Some(*index),
            Self::Finished => None,
        }
    }

    #[must_use]
    pub fn is_awaiting_answer(&self) -> bool {
        matches!(self, Self::AwaitingAnswer { .. })
    }
}

/// Result of a single countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Counting { seconds_left: u32 },
    TimedOut,
    /// The question was not awaiting an answer; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next { index: usize },
    Finished(GameSummary),
}

//
// ─── GAME ──────────────────────────────────────────────────────────────────────
//

/// One playthrough of ten questions.
///
/// Steps through the first `QUESTIONS_PER_GAME` clues in the order given;
/// callers shuffle before constructing. The countdown only moves when `tick`
/// is called, so any scheduler (UI interval, test loop) can drive it.
pub struct TriviaGame {
    clues: Vec<Clue>,
    state: GameState,
    score: u32,
    outcomes: Vec<QuestionOutcome>,
    started_at: DateTime<Utc>,
    summary: Option<GameSummary>,
}

impl TriviaGame {
    /// # Errors
    ///
    /// Returns `GameError::NotEnoughClues` if fewer than `QUESTIONS_PER_GAME` clues are given.
    pub fn new(mut clues: Vec<Clue>, started_at: DateTime<Utc>) -> Result<Self, GameError> {
        if clues.len() < QUESTIONS_PER_GAME {
            return Err(GameError::NotEnoughClues {
                needed: QUESTIONS_PER_GAME,
                got: clues.len(),
            });
        }
        clues.truncate(QUESTIONS_PER_GAME);

        Ok(Self {
            clues,
            state: GameState::AwaitingAnswer {
                index: 0,
                seconds_left: SECONDS_PER_QUESTION,
            },
            score: 0,
            outcomes: Vec::with_capacity(QUESTIONS_PER_GAME),
            started_at,
            summary: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.clues.len()
    }

    /// Set once the last question has been advanced past.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished)
    }

    #[must_use]
    pub fn current_clue(&self) -> Option<&Clue> {
        self.state.index().and_then(|index| self.clues.get(index))
    }

    /// Count down one second on the active question.
    pub fn tick(&mut self) -> TickOutcome {
        let GameState::AwaitingAnswer {
            index,
            seconds_left,
        } = self.state
        else {
            return TickOutcome::Ignored;
        };

        let seconds_left = seconds_left.saturating_sub(1);
        if seconds_left == 0 {
            self.state = GameState::Resolved {
                index,
                resolution: Resolution::TimedOut,
            };
            return TickOutcome::TimedOut;
        }

        self.state = GameState::AwaitingAnswer {
            index,
            seconds_left,
        };
        TickOutcome::Counting { seconds_left }
    }

    /// Grade an answer for the active question.
    ///
    /// A wrong answer leaves the question open for another try.
    ///
    /// # Errors
    ///
    /// Returns `GameError::AlreadyResolved` once the question was answered or timed out.
    /// Returns `GameError::NotPlaying` after the game finished.
    /// Returns `GameError::EmptyInput` for blank text; nothing changes.
    pub fn submit(&mut self, raw: &str) -> Result<Verdict, GameError> {
        let index = match self.state {
            GameState::AwaitingAnswer { index, .. } => index,
            GameState::Resolved { .. } => return Err(GameError::AlreadyResolved),
            GameState::Finished => return Err(GameError::NotPlaying),
        };
        let guess = Guess::parse(raw)?;
        let clue = self.clues.get(index).ok_or(GameError::NotPlaying)?;

        if !guess.matches(clue.answer()) {
            return Ok(Verdict::Wrong);
        }

        self.score = self.score.saturating_add(1);
        self.state = GameState::Resolved {
            index,
            resolution: Resolution::Correct,
        };
        Ok(Verdict::Correct)
    }

    /// Move past the current question, finishing the game after the last one.
    ///
    /// `now` stamps the summary when the game finishes. A `now` earlier than the
    /// start (wall clock stepped back) is clamped to the start.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` if the game already finished.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<AdvanceOutcome, GameError> {
        let (index, outcome) = match self.state {
            GameState::AwaitingAnswer { index, .. } => (index, QuestionOutcome::Skipped),
            GameState::Resolved {
                index,
                resolution: Resolution::Correct,
            } => (index, QuestionOutcome::Correct),
            GameState::Resolved {
                index,
                resolution: Resolution::TimedOut,
            } => (index, QuestionOutcome::TimedOut),
            GameState::Finished => return Err(GameError::NotPlaying),
        };
        let next = index + 1;
        if next >= self.clues.len() {
            // State only changes once the summary is built.
            let mut outcomes = self.outcomes.clone();
            outcomes.push(outcome);
            let completed_at = now.max(self.started_at);
            let summary = GameSummary::from_outcomes(self.started_at, completed_at, &outcomes)?;
            self.outcomes = outcomes;
            self.state = GameState::Finished;
            self.summary = Some(summary.clone());
            return Ok(AdvanceOutcome::Finished(summary));
        }

        self.outcomes.push(outcome);
        self.state = GameState::AwaitingAnswer {
            index: next,
            seconds_left: SECONDS_PER_QUESTION,
        };
        Ok(AdvanceOutcome::Next { index: next })
    }
}

impl fmt::Debug for TriviaGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriviaGame")
            .field("clues_len", &self.clues.len())
            .field("state", &self.state)
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
