//! HTTP loader for feed entries.

use crate::features::feed::state::{FeedEntry, FeedError, parse_entries};
use gloo_net::http::Request;

/// GET `url` and decode the body as a list of entries.
///
/// # Errors
/// Returns [`FeedError`] for transport failures, non-2xx statuses and
/// undecodable bodies.
#[allow(clippy::future_not_send)]
pub(crate) async fn fetch_entries(url: &str) -> Result<Vec<FeedEntry>, FeedError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FeedError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| FeedError::Transport(err.to_string()))?;
    parse_entries(&body)
}
