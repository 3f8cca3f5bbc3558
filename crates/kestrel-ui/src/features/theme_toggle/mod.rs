//! Light/dark toggle button backed by `localStorage`.
//!
//! Mode parsing, persistence and sizing live in [`crate::core::theme`].

#[cfg(target_arch = "wasm32")]
pub mod view;
