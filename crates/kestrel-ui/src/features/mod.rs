//! Widget features: pure view state plus the Yew views that render it.

pub mod accordion;
pub mod feed;
pub mod navbar;
pub mod search;
pub mod sidebar;
pub mod theme_toggle;
