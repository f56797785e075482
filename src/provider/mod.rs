//! Word provider: a random word from one upstream, its definitions from another.
//!
//! The dictionary payload is reduced to one definition per part of speech,
//! the longest one offered (first occurrence wins ties). Unknown words are
//! not an error: they come back with an empty `meanings` list.

mod types;

pub use types::*;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::ProviderConfig;
use crate::models::{Definition, Meaning, WordRecord};

/// Upstream fetch errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("random word source returned no word")]
    NoWord,

    #[error("unexpected dictionary response: {0}")]
    Shape(#[from] serde_json::Error),
}

/// HTTP client for the random-word and dictionary upstreams.
#[derive(Debug, Clone)]
pub struct WordProvider {
    config: ProviderConfig,
    client: Client,
}

impl WordProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch a random word and its normalized definitions.
    pub async fn fetch_random_defined_word(&self) -> Result<WordRecord, ProviderError> {
        let word = self.fetch_random_word().await?;
        let entry = self.lookup(&word).await?;
        Ok(normalize(word, entry))
    }

    async fn fetch_random_word(&self) -> Result<String, ProviderError> {
        tracing::debug!("Fetching random word from {}", self.config.random_word_url);
        let words: Vec<String> = self
            .client
            .get(&self.config.random_word_url)
            .send()
            .await?
            .json()
            .await?;

        words
            .into_iter()
            .next()
            .filter(|word| !word.is_empty())
            .ok_or(ProviderError::NoWord)
    }

    /// Look a word up as returned, without case normalization.
    async fn lookup(&self, word: &str) -> Result<Option<DictionaryEntry>, ProviderError> {
        let url = format!(
            "{}/{}",
            self.config.dictionary_url.trim_end_matches('/'),
            urlencoding::encode(word)
        );
        tracing::debug!("Looking up definitions for {:?}", word);

        // The dictionary answers unknown words with a non-2xx JSON object,
        // so the status is not checked here.
        let body: Value = self.client.get(&url).send().await?.json().await?;
        first_entry(body)
    }
}

/// Pick the first dictionary entry out of a response body.
///
/// Anything other than a non-empty array means "no definitions".
pub fn first_entry(body: Value) -> Result<Option<DictionaryEntry>, ProviderError> {
    match body {
        Value::Array(entries) => match entries.into_iter().next() {
            Some(entry) => Ok(Some(serde_json::from_value(entry)?)),
            None => Ok(None),
        },
        _ => Ok(None),
    }
}

/// Build the served record from the looked-up word and its first entry.
pub fn normalize(word: String, entry: Option<DictionaryEntry>) -> WordRecord {
    match entry {
        Some(entry) => WordRecord {
            word: entry.word,
            meanings: entry
                .meanings
                .iter()
                .filter_map(normalize_meaning)
                .collect(),
        },
        None => WordRecord::undefined(word),
    }
}

/// Collapse a meaning to its single longest definition.
///
/// Meanings without any definitions are dropped.
pub fn normalize_meaning(meaning: &DictionaryMeaning) -> Option<Meaning> {
    let longest = longest_definition(&meaning.definitions)?;
    Some(Meaning {
        part_of_speech: meaning.part_of_speech.clone(),
        definitions: vec![Definition {
            definition: longest.definition.clone(),
        }],
    })
}

/// The longest definition, measured in UTF-16 code units; the earliest one on a tie.
pub fn longest_definition(definitions: &[DictionaryDefinition]) -> Option<&DictionaryDefinition> {
    definitions.iter().fold(None, |longest, current| match longest {
        Some(best) if text_len(current) <= text_len(best) => Some(best),
        _ => Some(current),
    })
}

fn text_len(definition: &DictionaryDefinition) -> usize {
    definition.definition.encode_utf16().count()
}
