//! Search box state: term, capped results and dropdown visibility.
//!
//! Every scheduled lookup carries a ticket. Typing, clearing or selecting a
//! result issues a new ticket, so answers for superseded terms are dropped.

use crate::features::search::lookup::{SearchError, SearchResult};

/// Quiet period before a lookup runs.
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Maximum number of results shown.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Identifies one scheduled lookup.
pub type Ticket = u64;

/// What the view must do after the term changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchCommand {
    /// Cancel any pending timer and start a new one for `term`.
    Schedule {
        /// Ticket the lookup must present when it starts and resolves.
        ticket: Ticket,
        /// Term to look up.
        term: String,
    },
    /// Cancel any pending timer; nothing to look up.
    Cancel,
}

/// Local view state of a search box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    term: String,
    results: Vec<SearchResult>,
    searching: bool,
    open: bool,
    ticket: Ticket,
}

impl SearchState {
    /// Current input text.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Results shown in the dropdown.
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// A lookup is in flight for the current term.
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.searching
    }

    /// The dropdown is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The clear button is visible.
    #[must_use]
    pub const fn has_term(&self) -> bool {
        !self.term.is_empty()
    }

    /// Record a keystroke. An empty term resets immediately; anything else
    /// schedules a debounced lookup that supersedes earlier ones.
    pub fn input(&mut self, term: impl Into<String>) -> SearchCommand {
        self.term = term.into();
        self.ticket += 1;
        if self.term.is_empty() {
            self.reset_results();
            return SearchCommand::Cancel;
        }
        SearchCommand::Schedule {
            ticket: self.ticket,
            term: self.term.clone(),
        }
    }

    /// The debounce timer fired. Returns `false` when the ticket is stale and
    /// the lookup should not run.
    pub const fn begin(&mut self, ticket: Ticket) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.searching = true;
        true
    }

    /// Apply a lookup outcome. Results are capped at `max_results` and the
    /// dropdown opens only when something was found; a failure clears the
    /// results and closes it. Returns `false` for stale tickets.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<SearchResult>, SearchError>,
        max_results: usize,
    ) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.searching = false;
        let Ok(mut results) = outcome else {
            self.reset_results();
            return true;
        };
        results.truncate(max_results);
        self.open = !results.is_empty();
        self.results = results;
        true
    }

    /// Escape key or clear button: empty term, no results, closed.
    pub fn clear(&mut self) {
        self.term.clear();
        self.ticket += 1;
        self.reset_results();
    }

    /// A result was chosen; returns the link to navigate to and resets.
    pub fn select(&mut self, result: &SearchResult) -> String {
        let link = result.link.clone();
        self.clear();
        link
    }

    fn reset_results(&mut self) {
        self.results.clear();
        self.searching = false;
        self.open = false;
    }
}

/// Keys that dismiss the search box.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
