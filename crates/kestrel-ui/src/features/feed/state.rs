//! Feed entries, fetch failures and the rendered load state.

use serde::Deserialize;
use thiserror::Error;

/// One entry in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeedEntry {
    /// Numeric identifier from the backend.
    pub id: u64,
    /// Header text.
    pub title: String,
    /// Body revealed when the entry is open.
    pub description: String,
}

impl FeedEntry {
    /// Open-set key for the entry.
    #[must_use]
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Failure loading the feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The server answered with a non-success status.
    #[error("http error status: {0}")]
    Status(u16),
    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),
    /// The body was not a JSON array of entries.
    #[error("invalid feed payload: {0}")]
    Decode(String),
}

/// What the feed accordion renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedState {
    /// Request in flight.
    Loading,
    /// Request failed; the message is shown to the user.
    Failed(String),
    /// Entries to render; empty shows a placeholder.
    Ready(Vec<FeedEntry>),
}

impl FeedState {
    /// Convert a fetch outcome into a render state.
    #[must_use]
    pub fn from_outcome(outcome: Result<Vec<FeedEntry>, FeedError>) -> Self {
        outcome.map_or_else(|err| Self::Failed(err.to_string()), Self::Ready)
    }
}

/// Decode a response body.
///
/// # Errors
/// Returns [`FeedError::Decode`] when `body` is not a JSON array of entries.
pub fn parse_entries(body: &str) -> Result<Vec<FeedEntry>, FeedError> {
    serde_json::from_str(body).map_err(|err| FeedError::Decode(err.to_string()))
}

/// `-` when open, `+` when closed.
#[must_use]
pub const fn marker(open: bool) -> &'static str {
    if open { "-" } else { "+" }
}

/// Entries shown when no source URL is configured.
#[must_use]
pub fn sample_entries() -> Vec<FeedEntry> {
    vec![
        FeedEntry {
            id: 1,
            title: "Data 1".to_string(),
            description: "The sun dipped below the horizon, casting a warm golden glow over the tranquil meadow.".to_string(),
        },
        FeedEntry {
            id: 2,
            title: "Data 2".to_string(),
            description: "Birds chirped their evening songs, and a gentle breeze rustled through the tall grass. In the distance, a lone oak tree stood proudly, its branches stretching toward the sky like ancient arms.".to_string(),
        },
        FeedEntry {
            id: 3,
            title: "Data 3".to_string(),
            description: "The air was filled with the scent of wildflowers, and the world seemed to pause for a moment, as if holding its breath.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accordion::state::{AccordionMode, OpenSet};

    #[test]
    fn parses_entry_arrays() {
        let body = r#"[{"id":7,"title":"Seven","description":"lucky"}]"#;
        let entries = parse_entries(body).expect("valid payload");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key(), "7");
    }

    #[test]
    fn rejects_non_array_payloads() {
        assert!(matches!(
            parse_entries(r#"{"id":1}"#),
            Err(FeedError::Decode(_))
        ));
    }

    #[test]
    fn outcome_maps_to_render_state() {
        assert_eq!(
            FeedState::from_outcome(Ok(Vec::new())),
            FeedState::Ready(Vec::new())
        );
        assert_eq!(
            FeedState::from_outcome(Err(FeedError::Status(404))),
            FeedState::Failed("http error status: 404".to_string())
        );
    }

    #[test]
    fn single_selection_over_entries() {
        let entries = sample_entries();
        let open = OpenSet::new()
            .toggle(AccordionMode::Single, &entries[0].key())
            .toggle(AccordionMode::Single, &entries[2].key());
        assert!(!open.is_open(&entries[0].key()));
        assert!(open.is_open(&entries[2].key()));
        assert_eq!(marker(open.is_open(&entries[2].key())), "-");
        assert_eq!(marker(open.is_open(&entries[1].key())), "+");
    }
}
