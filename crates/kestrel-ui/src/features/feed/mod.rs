//! Single-select accordion fed from a JSON endpoint.
//!
//! # Design
//! - Loading, failure and empty states are explicit variants of [`state::FeedState`].
//! - Response decoding is pure so it can be tested without a browser.
//! - Selection reuses the accordion open-set in single mode.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
