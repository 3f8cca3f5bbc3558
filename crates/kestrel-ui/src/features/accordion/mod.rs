//! Collapsible accordion.
//!
//! # Design
//! - The open-set is the only state; every click goes through [`state::OpenSet::toggle`].
//! - Styling rules live next to the state so they can be tested natively.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
