//! History store backed by a client-held token.
//!
//! The server keeps no history of its own. Every request presents the
//! token (the `wordHistory` cookie), and `append` hands back a new token
//! for the response to set. The token is the JSON encoding of the
//! newest-first [`HistoryList`].
//!
//! Retention is enforced by the cookie's max-age alone; entry timestamps are
//! never inspected for expiry.

use axum_extra::extract::cookie::{Cookie, SameSite};
use thiserror::Error;

use crate::models::{HistoryEntry, HistoryList};

/// Name of the cookie carrying the history token.
pub const HISTORY_COOKIE: &str = "wordHistory";

/// Maximum number of entries kept.
pub const HISTORY_CAPACITY: usize = 10;

/// Lifetime of the history cookie.
pub const HISTORY_MAX_AGE_DAYS: i64 = 30;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history token is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to persist history: {0}")]
    Persist(String),
}

/// Strictly decode a token.
pub fn decode(token: &str) -> Result<HistoryList, HistoryError> {
    serde_json::from_str(token).map_err(HistoryError::Corrupt)
}

/// Encode a history list as a token.
pub fn encode(history: &[HistoryEntry]) -> Result<String, HistoryError> {
    serde_json::to_string(history).map_err(|e| HistoryError::Persist(e.to_string()))
}

/// Read the history carried by a token.
///
/// A missing or unreadable token is an empty history; corruption is logged
/// and never reaches the caller. Oversized lists keep their newest
/// [`HISTORY_CAPACITY`] entries.
pub fn read(token: Option<&str>) -> HistoryList {
    let Some(token) = token else {
        return HistoryList::new();
    };

    match decode(token) {
        Ok(mut history) => {
            history.truncate(HISTORY_CAPACITY);
            history
        }
        Err(e) => {
            tracing::warn!("Discarding unreadable history token: {}", e);
            HistoryList::new()
        }
    }
}

/// Prepend `new_entries` to `existing` and keep the first [`HISTORY_CAPACITY`].
///
/// Relative order within each side is preserved and duplicates are kept.
pub fn merge_history(new_entries: &[HistoryEntry], existing: &[HistoryEntry]) -> HistoryList {
    new_entries
        .iter()
        .chain(existing)
        .take(HISTORY_CAPACITY)
        .cloned()
        .collect()
}

/// Merge `new_entries` into the history carried by `token`.
///
/// Returns the updated list together with the token encoding it.
pub fn append(
    token: Option<&str>,
    new_entries: &[HistoryEntry],
) -> Result<(HistoryList, String), HistoryError> {
    let existing = read(token);
    let updated = merge_history(new_entries, &existing);
    let token = encode(&updated)?;
    Ok((updated, token))
}

/// Build the `Set-Cookie` for a history token.
pub fn history_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((HISTORY_COOKIE, token))
        .path("/")
        .max_age(time::Duration::days(HISTORY_MAX_AGE_DAYS))
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_carries_the_retention_policy() {
        let cookie = history_cookie("[]".to_string(), false);

        assert_eq!(cookie.name(), "wordHistory");
        assert_eq!(cookie.value(), "[]");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(2_592_000)));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn cookie_is_secure_in_production() {
        let cookie = history_cookie("[]".to_string(), true);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn decode_reports_corruption() {
        assert!(matches!(decode("not-json"), Err(HistoryError::Corrupt(_))));
        assert!(matches!(
            decode(r#"{"word":"cat","timestamp":1}"#),
            Err(HistoryError::Corrupt(_))
        ));
    }
}
