//! Responsive top navigation bar.
//!
//! # Design
//! - Two flags: mobile menu open, and page scrolled past a fixed threshold.
//! - Window listeners live only as long as the component.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
