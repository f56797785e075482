//! Wire shapes of the upstream dictionary service.
//!
//! Only the fields Wordmark reads are modelled; everything else in the
//! upstream payload (phonetics, synonyms, examples, ...) is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<DictionaryMeaning>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<DictionaryDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryDefinition {
    pub definition: String,
}
