//! Domain models for Wordmark.
//!
//! # Core Concepts
//!
//! - [`WordRecord`]: A word with its normalized meanings, produced fresh for
//!   every request and never stored server-side.
//! - [`Meaning`]: A part-of-speech grouping. After normalization it carries
//!   exactly one [`Definition`], the longest one the dictionary offered.
//! - [`HistoryEntry`]: A word paired with the moment it was shown. The
//!   history list only ever lives inside the client-held token.

mod history;
mod word;

pub use history::*;
pub use word::*;
