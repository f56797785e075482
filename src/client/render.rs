//! Plain-text rendering of the page and of copied definitions.

use std::time::Instant;

use chrono::{DateTime, Local};

use super::ViewState;
use crate::models::{HistoryEntry, WordRecord};

/// Format a record the way it is copied to the clipboard.
///
/// Example output:
/// ```text
/// "ephemeral"
///
/// adjective:
/// lasting for a very short time
///
/// ```
pub fn format_definition_text(record: &WordRecord) -> String {
    let mut text = format!("\"{}\"\n\n", record.word);
    for meaning in &record.meanings {
        text.push_str(&meaning.part_of_speech);
        text.push_str(":\n");
        for definition in &meaning.definitions {
            text.push_str(&definition.definition);
            text.push('\n');
        }
        text.push('\n');
    }
    text
}

/// Render the whole page as text.
pub fn render(view: &ViewState, now: Instant) -> String {
    let mut output = String::new();

    if view.is_loading() {
        output.push_str("Loading...\n");
        return output;
    }

    match &view.word {
        Some(record) => render_word(&mut output, record),
        None => output.push_str("No word could be loaded. Try a new word.\n"),
    }

    output.push('\n');
    output.push_str(&format!(
        "[n] New Word   [s] {}   [h] History   [q] Quit\n",
        view.copy_label(now)
    ));

    if view.history_visible {
        output.push('\n');
        render_history(&mut output, &view.history);
    }

    output
}

fn render_word(output: &mut String, record: &WordRecord) {
    output.push_str(&format!("\u{201c} {} \u{201d}\n\n", record.word));

    if !record.has_definitions() {
        output.push_str("No definition found for this word.\n");
        return;
    }

    for meaning in &record.meanings {
        output.push_str(&meaning.part_of_speech);
        output.push('\n');
        for definition in &meaning.definitions {
            output.push_str("  > ");
            output.push_str(&definition.definition);
            output.push('\n');
        }
    }
}

fn render_history(output: &mut String, history: &[HistoryEntry]) {
    output.push_str("History\n");
    if history.is_empty() {
        output.push_str("  No history yet\n");
        return;
    }

    let width = history.iter().map(|e| e.word.chars().count()).max().unwrap_or(0);
    for entry in history {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            entry.word,
            time_of_day(entry.timestamp),
            width = width
        ));
    }
}

/// Local time of day for a millisecond timestamp.
fn time_of_day(timestamp: i64) -> String {
    DateTime::from_timestamp_millis(timestamp)
        .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Phase;
    use crate::models::{Definition, Meaning};

    fn record() -> WordRecord {
        WordRecord {
            word: "run".to_string(),
            meanings: vec![
                Meaning {
                    part_of_speech: "verb".to_string(),
                    definitions: vec![Definition {
                        definition: "To move swiftly on foot.".to_string(),
                    }],
                },
                Meaning {
                    part_of_speech: "noun".to_string(),
                    definitions: vec![Definition {
                        definition: "An act of running.".to_string(),
                    }],
                },
            ],
        }
    }

    fn ready(word: Option<WordRecord>) -> ViewState {
        ViewState {
            phase: Phase::Ready,
            word,
            ..Default::default()
        }
    }

    #[test]
    fn definition_text_lists_each_meaning_with_trailing_blank_line() {
        assert_eq!(
            format_definition_text(&record()),
            "\"run\"\n\nverb:\nTo move swiftly on foot.\n\nnoun:\nAn act of running.\n\n"
        );
    }

    #[test]
    fn definition_text_without_meanings_is_just_the_word() {
        assert_eq!(
            format_definition_text(&WordRecord::undefined("xyzzytest")),
            "\"xyzzytest\"\n\n"
        );
    }

    #[test]
    fn loading_page_shows_only_spinner() {
        let page = render(&ViewState::default(), Instant::now());
        assert_eq!(page, "Loading...\n");
    }

    #[test]
    fn ready_page_shows_word_and_meanings() {
        let page = render(&ready(Some(record())), Instant::now());
        assert!(page.contains("run"));
        assert!(page.contains("verb\n  > To move swiftly on foot.\n"));
        assert!(page.contains("[s] Save"));
        assert!(!page.contains("History\n"));
    }

    #[test]
    fn undefined_word_shows_fallback_message() {
        let page = render(&ready(Some(WordRecord::undefined("xyzzytest"))), Instant::now());
        assert!(page.contains("xyzzytest"));
        assert!(page.contains("No definition found for this word."));
    }

    #[test]
    fn history_panel_lists_entries_when_visible() {
        let mut view = ready(Some(record()));
        view.history_visible = true;
        view.history = vec![
            HistoryEntry::new("run", 1_700_000_000_000),
            HistoryEntry::new("cat", 1_699_999_000_000),
        ];

        let page = render(&view, Instant::now());
        let panel = page.split("History\n").nth(1).unwrap();
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("run"));
        assert!(lines[1].trim_start().starts_with("cat"));
    }

    #[test]
    fn empty_history_panel_says_so() {
        let mut view = ready(None);
        view.history_visible = true;
        let page = render(&view, Instant::now());
        assert!(page.contains("No history yet"));
    }
}
