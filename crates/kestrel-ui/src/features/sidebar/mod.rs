//! Collapsible navigation sidebar.
//!
//! # Design
//! - One expanded flag per sidebar, shared with items through a Yew context.
//! - Items never mutate the flag; only the header button does.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
