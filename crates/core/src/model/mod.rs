mod answer;
mod batch;
mod clue;
mod ids;
mod summary;

pub use ids::{BroadcastId, CategoryId, ClueId};

pub use answer::{AnswerError, Guess, normalize_answer};
pub use batch::ClueBatch;
pub use clue::{Broadcast, Category, Clue};
pub use summary::{GameSummary, QuestionOutcome, SummaryError};
