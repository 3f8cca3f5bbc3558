//! Debounced search box with a results dropdown.
//!
//! # Design
//! - Keystrokes update local state immediately; the lookup runs after a quiet
//!   period and only the latest scheduled lookup may update the results.
//! - The lookup is injected by the caller; failures reset to an empty state.

pub mod lookup;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
