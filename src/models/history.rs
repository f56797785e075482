use serde::{Deserialize, Serialize};

/// A word that was shown to the user and when.
///
/// `timestamp` is milliseconds since the Unix epoch. It is good enough as a
/// display and sort key but is not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    pub timestamp: i64,
}

impl HistoryEntry {
    pub fn new(word: impl Into<String>, timestamp: i64) -> Self {
        Self {
            word: word.into(),
            timestamp,
        }
    }

    /// An entry stamped with the current wall-clock time.
    pub fn now(word: impl Into<String>) -> Self {
        Self::new(word, chrono::Utc::now().timestamp_millis())
    }
}

/// Newest-first list of recently shown words, at most
/// [`HISTORY_CAPACITY`](crate::history::HISTORY_CAPACITY) long.
pub type HistoryList = Vec<HistoryEntry>;

/// Acknowledgement body returned by `POST /api/history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendAck {
    pub success: bool,
}
