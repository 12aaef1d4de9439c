//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::GameError;

/// Errors emitted by a `ClueSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("invalid clue endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("could not reach the trivia server: {0}")]
    Network(#[from] reqwest::Error),
    #[error("bad response code of {0} received")]
    BadStatus(reqwest::StatusCode),
    #[error("could not decode clues: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors emitted by `TriviaSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a game is already in progress")]
    GameInProgress,
    #[error("clues are still loading")]
    Loading,
    #[error("no game is being started")]
    NotStarting,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Game(#[from] GameError),
}
