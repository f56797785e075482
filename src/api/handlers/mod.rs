use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use super::AppState;
use crate::history::{self, HISTORY_COOKIE};
use crate::models::*;

/// Message returned when the word providers fail.
const WORD_FETCH_FAILED: &str = "Failed to fetch word data";

// ============================================================
// Error Handling
// ============================================================

/// Log a provider failure and return the generic error body.
/// The cause stays in the server log; clients only see a fixed message.
fn word_error(e: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("Error fetching word data: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: WORD_FETCH_FAILED.to_string(),
        }),
    )
}

/// Log a history persistence failure and return a failed acknowledgement.
fn persist_error(e: impl std::fmt::Display) -> (StatusCode, Json<AppendAck>) {
    tracing::error!("Error saving history: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(AppendAck { success: false }),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Words
// ============================================================

pub async fn get_word(
    State(state): State<AppState>,
) -> Result<Json<WordRecord>, (StatusCode, Json<ErrorResponse>)> {
    let record = state
        .provider
        .fetch_random_defined_word()
        .await
        .map_err(word_error)?;

    tracing::info!(
        "Serving word {:?} with {} meaning(s)",
        record.word,
        record.meanings.len()
    );
    Ok(Json(record))
}

// ============================================================
// History
// ============================================================

pub async fn get_history(jar: CookieJar) -> Json<HistoryList> {
    let token = jar.get(HISTORY_COOKIE).map(|cookie| cookie.value());
    Json(history::read(token))
}

pub async fn append_history(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<Vec<HistoryEntry>>, JsonRejection>,
) -> Result<(CookieJar, Json<AppendAck>), (StatusCode, Json<AppendAck>)> {
    let Json(new_entries) = body.map_err(persist_error)?;

    let token = jar.get(HISTORY_COOKIE).map(|cookie| cookie.value());
    let (updated, token) = history::append(token, &new_entries).map_err(persist_error)?;
    tracing::debug!("History now holds {} entries", updated.len());

    let jar = jar.add(history::history_cookie(token, state.secure_cookies));
    Ok((jar, Json(AppendAck { success: true })))
}
