#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]
//! Kestrel presentational widgets for Yew front-ends.
//!
//! DOM-free view state lives in [`crate::core`] and the `state` modules under
//! [`crate::features`]; the Yew components that render it are compiled for wasm32 only.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::breakpoints::{self, for_width};
    use crate::core::theme::ThemeMode;

    #[test]
    fn breakpoint_selection_matches_ranges() {
        assert_eq!(for_width(0).name, breakpoints::XS.name);
        assert_eq!(for_width(639).name, breakpoints::XS.name);
        assert_eq!(for_width(640).name, breakpoints::SM.name);
        assert_eq!(for_width(1024).name, breakpoints::LG.name);
        assert_eq!(for_width(2000).name, breakpoints::XXL.name);
    }

    #[test]
    fn theme_defaults_to_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }
}
