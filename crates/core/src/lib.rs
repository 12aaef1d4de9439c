#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod model;
pub mod time;

pub use error::GameError;
pub use game::{
    AdvanceOutcome, GameState, QUESTIONS_PER_GAME, Resolution, SECONDS_PER_QUESTION, TickOutcome,
    TriviaGame, URGENT_THRESHOLD_SECS, Verdict,
};
pub use time::Clock;
