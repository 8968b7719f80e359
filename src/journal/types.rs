//! Journal record definitions.
//!
//! [`JournalEntry`] is the persisted record; [`ScoredEntry`] pairs an entry
//! with its similarity to a query for the duration of one retrieval.

use serde::{Deserialize, Serialize};

/// One journal entry, as stored in the journal file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Calendar date, `YYYY-MM-DD`. Not unique across entries.
    pub date: String,
    /// The raw journal text.
    pub text: String,
    /// Embedding of `text` produced by the embedding provider.
    pub embedding: Vec<f64>,
}

impl JournalEntry {
    pub fn new(date: impl Into<String>, text: impl Into<String>, embedding: Vec<f64>) -> Self {
        Self {
            date: date.into(),
            text: text.into(),
            embedding,
        }
    }

    /// `true` if this entry has the given date and text.
    pub fn matches(&self, date: &str, text: &str) -> bool {
        self.date == date && self.text == text
    }
}

/// A stored entry together with its cosine similarity to a query embedding.
#[derive(Debug, Clone, Copy)]
pub struct ScoredEntry<'a> {
    pub score: f64,
    pub entry: &'a JournalEntry,
}
