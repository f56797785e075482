//! Page load state machine.
//!
//! `Loading` → read history → fetch word → append to history → `Ready`.
//! Any failure along the way is logged and still ends in `Ready` with
//! whatever was obtained, so the page never sticks in `Loading`.

use std::time::{Duration, Instant};

use super::{format_definition_text, Clipboard, ClipboardError, ClientError, WordmarkApi};
use crate::history::merge_history;
use crate::models::*;

/// How long the "Copied!" acknowledgement stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

/// Transient page state. Nothing here outlives the page.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub phase: Phase,
    pub word: Option<WordRecord>,
    /// Newest-first, computed locally rather than echoed by the server.
    pub history: HistoryList,
    pub history_visible: bool,
    pub copied_at: Option<Instant>,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copy_feedback_remaining(now).is_some()
    }

    /// Time left before "Copied!" reverts, if it is showing.
    pub fn copy_feedback_remaining(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.copied_at?);
        COPY_FEEDBACK
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }

    /// Label of the save button.
    pub fn copy_label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            "Copied!"
        } else {
            "Save"
        }
    }
}

pub struct Orchestrator<A, C> {
    api: A,
    clipboard: C,
    view: ViewState,
}

impl<A: WordmarkApi, C: Clipboard> Orchestrator<A, C> {
    pub fn new(api: A, clipboard: C) -> Self {
        Self {
            api,
            clipboard,
            view: ViewState::default(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Run the load sequence from the top.
    pub async fn load(&mut self) {
        self.view.phase = Phase::Loading;
        if let Err(e) = self.load_word().await {
            tracing::error!("Error fetching data: {}", e);
        }
        self.view.phase = Phase::Ready;
    }

    async fn load_word(&mut self) -> Result<(), ClientError> {
        let saved = self.api.read_history().await?;
        self.view.history = saved.clone();

        let record = self.api.fetch_word().await?;
        let entry = HistoryEntry::now(record.word.clone());
        self.view.word = Some(record);

        // The displayed history does not wait on, or depend on, the server's merge.
        let new_entries = std::slice::from_ref(&entry);
        let displayed = merge_history(new_entries, &saved);
        if let Err(e) = self.api.append_history(new_entries).await {
            tracing::warn!("Error saving history: {}", e);
        }
        self.view.history = displayed;
        Ok(())
    }

    /// Start over as if the page were reloaded.
    pub async fn new_word(&mut self) {
        self.view = ViewState::default();
        self.load().await;
    }

    /// Copy the current word and its meanings as plain text.
    pub fn save(&mut self, now: Instant) -> Result<(), ClipboardError> {
        let text = self
            .view
            .word
            .as_ref()
            .map(format_definition_text)
            .unwrap_or_default();

        match self.clipboard.set_text(&text) {
            Ok(()) => {
                self.view.copied_at = Some(now);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to copy text: {}", e);
                Err(e)
            }
        }
    }

    pub fn toggle_history(&mut self) {
        self.view.history_visible = !self.view.history_visible;
    }
}
