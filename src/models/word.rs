use serde::{Deserialize, Serialize};

/// A word and its meanings, as served by `GET /api/words`.
///
/// `meanings` is empty when the dictionary has no entry for the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl WordRecord {
    /// A record for a word the dictionary does not know.
    pub fn undefined(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meanings: Vec::new(),
        }
    }

    pub fn has_definitions(&self) -> bool {
        !self.meanings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
}

/// Error body returned by the word endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
