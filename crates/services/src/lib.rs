#![forbid(unsafe_code)]

pub mod clue_source;
pub mod error;
pub mod render;
pub mod session;

pub use trivia_core::Clock;

pub use clue_source::{ClueSource, ClueSourceConfig, HttpClueSource, decode_batch};
pub use error::{FetchError, SessionError};
pub use render::{Feedback, RenderState, SessionPhase, StartFailure};
pub use session::TriviaSession;
