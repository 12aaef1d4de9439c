use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::{BroadcastId, CategoryId, ClueId};

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Category a clue belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    canon: bool,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, title: impl Into<String>, canon: bool) -> Self {
        Self {
            id,
            title: title.into(),
            canon,
        }
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_canon(&self) -> bool {
        self.canon
    }
}

//
// ─── BROADCAST ─────────────────────────────────────────────────────────────────
//

/// Broadcast metadata attached to a clue (the API calls this `game`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    #[serde(default)]
    aired: String,
    #[serde(default)]
    canon: bool,
}

impl Broadcast {
    #[must_use]
    pub fn new(aired: impl Into<String>, canon: bool) -> Self {
        Self {
            aired: aired.into(),
            canon,
        }
    }

    /// Raw air date as sent by the API.
    #[must_use]
    pub fn aired(&self) -> &str {
        &self.aired
    }

    /// Calendar date the clue aired on.
    ///
    /// Accepts RFC 3339 timestamps as well as a bare `YYYY-MM-DD` prefix.
    /// Returns `None` when neither form parses.
    #[must_use]
    pub fn aired_on(&self) -> Option<NaiveDate> {
        let raw = self.aired.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.date_naive());
        }
        raw.get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    }

    #[must_use]
    pub fn is_canon(&self) -> bool {
        self.canon
    }
}

//
// ─── CLUE ──────────────────────────────────────────────────────────────────────
//

/// A single trivia clue as returned by the API.
///
/// Clues are immutable once decoded; the session only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    id: ClueId,
    #[serde(default)]
    answer: String,
    #[serde(default)]
    question: String,
    #[serde(default)]
    value: Option<u32>,
    category_id: CategoryId,
    #[serde(rename = "gameId")]
    broadcast_id: BroadcastId,
    #[serde(default)]
    invalid_count: Option<u32>,
    category: Category,
    #[serde(rename = "game")]
    broadcast: Broadcast,
    #[serde(default)]
    canon: bool,
}

impl Clue {
    /// Build a clue by hand. The category id is taken from `category`.
    #[must_use]
    pub fn new(
        id: ClueId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Category,
        broadcast: Broadcast,
    ) -> Self {
        Self {
            id,
            answer: answer.into(),
            question: question.into(),
            value: None,
            category_id: category.id(),
            broadcast_id: BroadcastId::new(0),
            invalid_count: None,
            category,
            broadcast,
            canon: true,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn id(&self) -> ClueId {
        self.id
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Dollar value of the clue, if the API assigned one.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    #[must_use]
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    #[must_use]
    pub fn broadcast_id(&self) -> BroadcastId {
        self.broadcast_id
    }

    /// Number of times players flagged this clue as invalid.
    #[must_use]
    pub fn invalid_count(&self) -> u32 {
        self.invalid_count.unwrap_or(0)
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn broadcast(&self) -> &Broadcast {
        &self.broadcast
    }

    #[must_use]
    pub fn is_canon(&self) -> bool {
        self.canon
    }
}
