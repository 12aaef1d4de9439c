use std::fmt;

use rand::seq::SliceRandom;
use tracing::{debug, info, warn};
use trivia_core::model::{Clue, ClueBatch};
use trivia_core::{
    AdvanceOutcome, Clock, GameError, GameState, QUESTIONS_PER_GAME, Resolution, TickOutcome,
    TriviaGame, URGENT_THRESHOLD_SECS, Verdict,
};

use crate::clue_source::ClueSource;
use crate::error::{FetchError, SessionError};
use crate::render::{Feedback, RenderState, SessionPhase, StartFailure};

enum Stage {
    Idle,
    Loading,
    Active(TriviaGame),
}

/// Restartable container around one game at a time.
///
/// All transitions take `&mut self`, so callers serialize them on one
/// scheduling context. Starting is split into `begin_start` and
/// `complete_start` so the fetch can run without holding the session.
pub struct TriviaSession {
    clock: Clock,
    stage: Stage,
    feedback: Feedback,
    failure: Option<StartFailure>,
}

impl TriviaSession {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            stage: Stage::Idle,
            feedback: Feedback::None,
            failure: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.stage {
            Stage::Idle => SessionPhase::Idle,
            Stage::Loading => SessionPhase::Loading,
            Stage::Active(game) => match game.state() {
                GameState::AwaitingAnswer { .. } => SessionPhase::AwaitingAnswer,
                GameState::Resolved { .. } => SessionPhase::Resolved,
                GameState::Finished => SessionPhase::Finished,
            },
        }
    }

    #[must_use]
    pub fn game(&self) -> Option<&TriviaGame> {
        match &self.stage {
            Stage::Active(game) => Some(game),
            Stage::Idle | Stage::Loading => None,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.game().map_or(0, TriviaGame::score)
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn failure(&self) -> Option<&StartFailure> {
        self.failure.as_ref()
    }

    /// Index of the question whose countdown should be running, if any.
    ///
    /// Changes exactly when a periodic tick driver must stop or restart.
    #[must_use]
    pub fn countdown_key(&self) -> Option<usize> {
        match self.game().map(TriviaGame::state) {
            Some(GameState::AwaitingAnswer { index, .. }) => Some(index),
            _ => None,
        }
    }

    /// Fetch, shuffle, and enter the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::GameInProgress` or `SessionError::Loading` when not restartable.
    /// Propagates fetch and batch-size failures; the session is left idle.
    pub async fn start(&mut self, source: &dyn ClueSource) -> Result<(), SessionError> {
        self.begin_start()?;
        let fetched = source.fetch().await;
        self.complete_start(fetched)
    }

    /// Mark the session as loading. Valid only from idle or finished.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Loading` if a fetch is already in flight.
    /// Returns `SessionError::GameInProgress` while a game is unfinished.
    pub fn begin_start(&mut self) -> Result<(), SessionError> {
        match self.phase() {
            SessionPhase::Loading => return Err(SessionError::Loading),
            SessionPhase::AwaitingAnswer | SessionPhase::Resolved => {
                return Err(SessionError::GameInProgress);
            }
            SessionPhase::Idle | SessionPhase::Finished => {}
        }
        debug!("starting new game");
        self.stage = Stage::Loading;
        self.feedback = Feedback::None;
        self.failure = None;
        Ok(())
    }

    /// Finish a start begun with `begin_start` using the fetched batch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarting` if `begin_start` was not called.
    /// Returns the fetch error, or `GameError::NotEnoughClues`, after returning to idle.
    pub fn complete_start(
        &mut self,
        fetched: Result<ClueBatch, FetchError>,
    ) -> Result<(), SessionError> {
        if !matches!(self.stage, Stage::Loading) {
            return Err(SessionError::NotStarting);
        }

        let result = fetched
            .map_err(SessionError::from)
            .and_then(|batch| {
                let mut clues = batch.into_clues();
                shuffle_clues(&mut clues);
                TriviaGame::new(clues, self.clock.now()).map_err(SessionError::from)
            });

        match result {
            Ok(game) => {
                info!(questions = game.total_questions(), "game started");
                self.stage = Stage::Active(game);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "could not start game");
                self.failure = StartFailure::from_error(&err);
                self.stage = Stage::Idle;
                Err(err)
            }
        }
    }

    /// One elapsed second. Ignored unless a question is awaiting an answer.
    pub fn tick(&mut self) -> TickOutcome {
        let Stage::Active(game) = &mut self.stage else {
            return TickOutcome::Ignored;
        };
        let outcome = game.tick();
        if outcome == TickOutcome::TimedOut {
            let answer = game
                .current_clue()
                .inspect(|clue| debug!(clue = %clue.id(), answer = clue.answer(), "question timed out"))
                .map(|clue| clue.answer().to_string())
                .unwrap_or_default();
            self.feedback = Feedback::TimedOut { answer };
        }
        outcome
    }

    /// # Errors
    ///
    /// Returns `GameError::EmptyInput` for blank text (state kept, feedback updated).
    /// Returns `GameError::AlreadyResolved` or `GameError::NotPlaying` outside an open question.
    pub fn submit(&mut self, text: &str) -> Result<Verdict, SessionError> {
        let Stage::Active(game) = &mut self.stage else {
            return Err(GameError::NotPlaying.into());
        };
        match game.submit(text) {
            Ok(verdict) => {
                debug!(?verdict, score = game.score(), "answer graded");
                self.feedback = match verdict {
                    Verdict::Correct => Feedback::Correct,
                    Verdict::Wrong => Feedback::Wrong,
                };
                Ok(verdict)
            }
            Err(GameError::EmptyInput) => {
                self.feedback = Feedback::EmptyInput;
                Err(GameError::EmptyInput.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` when no unfinished game exists.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        let Stage::Active(game) = &mut self.stage else {
            return Err(GameError::NotPlaying.into());
        };
        let outcome = game.advance(self.clock.now())?;
        self.feedback = Feedback::None;
        if let AdvanceOutcome::Finished(summary) = &outcome {
            info!(
                score = summary.score(),
                total = summary.total_questions(),
                "game finished"
            );
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn render_state(&self) -> RenderState {
        let phase = self.phase();
        let game = self.game();
        let clue = game.and_then(TriviaGame::current_clue);
        let state = game.map(TriviaGame::state);

        let seconds_left = match state {
            Some(GameState::AwaitingAnswer { seconds_left, .. }) => Some(seconds_left),
            Some(GameState::Resolved {
                resolution: Resolution::TimedOut,
                ..
            }) => Some(0),
            _ => None,
        };

        RenderState {
            phase,
            question_number: state.and_then(|state| state.index()).map(|index| index + 1),
            total_questions: game.map_or(QUESTIONS_PER_GAME, TriviaGame::total_questions),
            category: clue.map(|clue| clue.category().title().to_string()),
            question: clue.map(|clue| clue.question().to_string()),
            value: clue.and_then(Clue::value),
            aired_on: clue.and_then(|clue| clue.broadcast().aired_on()),
            seconds_left,
            urgent: seconds_left.is_some_and(|secs| secs <= URGENT_THRESHOLD_SECS),
            score: self.score(),
            feedback: self.feedback.clone(),
            summary: game.and_then(TriviaGame::summary).cloned(),
            failure: self.failure.clone(),
        }
    }
}

impl Default for TriviaSession {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl fmt::Debug for TriviaSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriviaSession")
            .field("phase", &self.phase())
            .field("score", &self.score())
            .field("feedback", &self.feedback)
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}

/// Uniform random permutation, freshly seeded per call.
pub fn shuffle_clues(clues: &mut [Clue]) {
    clues.shuffle(&mut rand::rng());
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
