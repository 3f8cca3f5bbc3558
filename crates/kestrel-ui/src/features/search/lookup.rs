//! Caller-supplied asynchronous search backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use thiserror::Error;

/// A single search hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Stable identifier, used as the list key.
    pub id: String,
    /// Primary line.
    pub title: String,
    /// Secondary line.
    pub description: String,
    /// Navigation target when the hit is chosen.
    pub link: String,
}

/// Lookup failures. The search box logs them and resets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The backend rejected or could not be reached.
    #[error("search lookup failed: {0}")]
    Lookup(String),
    /// The backend answered with data that could not be decoded.
    #[error("search response could not be decoded: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Boxed future returned by a [`SearchLookup`].
pub type LookupFuture = Pin<Box<dyn Future<Output = Result<Vec<SearchResult>, SearchError>>>>;

/// Shared handle to an async `term -> results` function.
///
/// Equality is identity of the wrapped function so the handle can sit in
/// component props.
#[derive(Clone)]
pub struct SearchLookup(Rc<dyn Fn(String) -> LookupFuture>);

impl SearchLookup {
    /// Wrap an async function.
    #[must_use]
    pub fn new<F, Fut>(lookup: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<SearchResult>, SearchError>> + 'static,
    {
        Self(Rc::new(move |term| Box::pin(lookup(term))))
    }

    /// Start a lookup for `term`.
    #[must_use]
    pub fn call(&self, term: String) -> LookupFuture {
        (self.0)(term)
    }
}

impl PartialEq for SearchLookup {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SearchLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SearchLookup(..)")
    }
}

/// Case-insensitive match over title and description.
#[must_use]
pub fn matches_term(result: &SearchResult, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    !needle.is_empty()
        && (result.title.to_lowercase().contains(&needle)
            || result.description.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::task::{Context, Poll, Waker};

    fn hit(id: &str, title: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("About {title}"),
            link: format!("/{id}"),
        }
    }

    fn poll_ready(mut future: LookupFuture) -> Result<Vec<SearchResult>, SearchError> {
        let mut cx = Context::from_waker(Waker::noop());
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(outcome) => outcome,
            Poll::Pending => panic!("lookup should resolve immediately"),
        }
    }

    #[test]
    fn lookup_forwards_the_term() {
        let lookup = SearchLookup::new(|term: String| async move { Ok(vec![hit(&term, &term)]) });
        let results = poll_ready(lookup.call("rust".to_string())).expect("lookup");
        assert_eq!(results, vec![hit("rust", "rust")]);
    }

    #[test]
    fn lookup_errors_pass_through() {
        let lookup = SearchLookup::new(|_term: String| async {
            Err(SearchError::Lookup("offline".to_string()))
        });
        assert_eq!(
            poll_ready(lookup.call("x".to_string())),
            Err(SearchError::Lookup("offline".to_string()))
        );
    }

    #[test]
    fn equality_is_identity() {
        let a = SearchLookup::new(|_term: String| async { Ok(Vec::new()) });
        let b = SearchLookup::new(|_term: String| async { Ok(Vec::new()) });
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn decode_errors_convert() {
        let err = serde_json::from_str::<Vec<SearchResult>>("{").unwrap_err();
        assert!(matches!(SearchError::from(err), SearchError::Decode(_)));
    }

    #[test]
    fn term_matching_ignores_case_and_blank_terms() {
        let result = hit("yew", "Yew Components");
        assert!(matches_term(&result, "components"));
        assert!(matches_term(&result, "ABOUT"));
        assert!(!matches_term(&result, "   "));
        assert!(!matches_term(&result, "leptos"));
    }
}
