//! Navbar flags, link attributes and class composition.

use crate::core::breakpoints::Breakpoint;
use yew::{Classes, classes};

const HEADER_SCROLLED: &str = "bg-white/90 dark:bg-gray-900/90 backdrop-blur-sm shadow-md";
const LINK_BASE: &str = "text-gray-600 dark:text-gray-300 hover:text-blue-500 \
                         dark:hover:text-blue-400 transition-colors duration-200";

/// Vertical scroll offset, in pixels, past which the bar gets a backdrop.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Whether a scroll offset counts as "scrolled".
#[must_use]
pub const fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Transient navbar flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    /// Mobile menu drawer is expanded.
    pub mobile_open: bool,
    /// Page is scrolled past [`SCROLL_THRESHOLD_PX`].
    pub scrolled: bool,
}

impl NavbarState {
    /// Flip the mobile menu.
    #[must_use]
    pub const fn toggle_menu(self) -> Self {
        Self {
            mobile_open: !self.mobile_open,
            ..self
        }
    }

    /// Close the mobile menu, e.g. after a link was followed.
    #[must_use]
    pub const fn close_menu(self) -> Self {
        Self {
            mobile_open: false,
            ..self
        }
    }

    /// Recompute the scrolled flag from the window offset.
    #[must_use]
    pub const fn on_scroll(self, scroll_y: f64) -> Self {
        Self {
            scrolled: is_scrolled(scroll_y),
            ..self
        }
    }

    /// The mobile menu has no meaning once the desktop layout is showing.
    #[must_use]
    pub const fn on_resize(self, width: u16, breakpoint: Breakpoint) -> Self {
        if breakpoint.reached_by(width) {
            self.close_menu()
        } else {
            self
        }
    }
}

/// A navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible text.
    pub label: String,
    /// Target URL or path.
    pub href: String,
    /// Opens in a new tab when set.
    pub external: bool,
}

impl NavLink {
    /// Internal link.
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: false,
        }
    }

    /// Link that leaves the site.
    #[must_use]
    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::new(label, href)
        }
    }

    /// `target` attribute.
    #[must_use]
    pub const fn target(&self) -> Option<&'static str> {
        if self.external { Some("_blank") } else { None }
    }

    /// `rel` attribute.
    #[must_use]
    pub const fn rel(&self) -> Option<&'static str> {
        if self.external {
            Some("noopener noreferrer")
        } else {
            None
        }
    }
}

/// `<header>` classes.
#[must_use]
pub fn header_classes(sticky: bool, scrolled: bool, extra: &Classes) -> Classes {
    classes!(
        "w-full",
        "py-4",
        "transition-shadow",
        "duration-300",
        sticky.then_some("sticky top-0 z-50"),
        if scrolled { HEADER_SCROLLED } else { "bg-transparent" },
        extra.clone(),
    )
}

/// Inner container classes.
#[must_use]
pub fn container_classes(extra: &Classes) -> Classes {
    classes!(
        "container",
        "mx-auto",
        "px-4",
        "flex",
        "items-center",
        "justify-between",
        extra.clone(),
    )
}

/// Desktop link row: hidden below the breakpoint.
#[must_use]
pub fn desktop_nav_classes(breakpoint: Breakpoint) -> Classes {
    classes!("items-center", "space-x-6", "hidden", breakpoint.variant("flex"))
}

/// Desktop link classes.
#[must_use]
pub fn desktop_link_classes(extra: &Classes) -> Classes {
    classes!(LINK_BASE, extra.clone())
}

/// Hamburger button: only below the breakpoint.
#[must_use]
pub fn menu_button_classes(breakpoint: Breakpoint) -> Classes {
    classes!(
        breakpoint.variant("hidden"),
        "text-gray-600",
        "dark:text-gray-300",
        "focus:outline-none",
    )
}

/// Mobile drawer classes.
#[must_use]
pub fn mobile_menu_classes(breakpoint: Breakpoint, open: bool) -> Classes {
    classes!(
        breakpoint.variant("hidden"),
        "overflow-hidden",
        "transition-height",
        "duration-300",
        "ease-in-out",
        if open { "h-auto" } else { "h-0" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::breakpoints::{LG, MD};

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn scrolling_past_and_back_flips_flag() {
        let state = NavbarState::default().on_scroll(240.0);
        assert!(state.scrolled);
        let state = state.on_scroll(4.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn menu_toggle_and_close() {
        let open = NavbarState::default().toggle_menu();
        assert!(open.mobile_open);
        assert!(!open.toggle_menu().mobile_open);
        assert!(!open.close_menu().mobile_open);
        assert!(open.on_scroll(50.0).mobile_open);
    }

    #[test]
    fn resize_to_desktop_closes_menu() {
        let open = NavbarState::default().toggle_menu();
        assert!(open.on_resize(800, LG).mobile_open);
        assert!(!open.on_resize(1024, LG).mobile_open);
        assert!(!open.on_resize(800, MD).mobile_open);
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let link = NavLink::external("Docs", "https://example.com");
        assert_eq!(link.target(), Some("_blank"));
        assert_eq!(link.rel(), Some("noopener noreferrer"));
        let home = NavLink::new("Home", "/");
        assert_eq!(home.target(), None);
        assert_eq!(home.rel(), None);
    }

    #[test]
    fn header_styles_follow_flags() {
        let plain = header_classes(false, false, &Classes::new());
        assert!(plain.contains("bg-transparent"));
        assert!(!plain.contains("sticky"));
        let pinned = header_classes(true, true, &classes!("bg-gray-50"));
        assert!(pinned.contains("sticky"));
        assert!(pinned.contains("z-50"));
        assert!(pinned.contains("shadow-md"));
        assert!(!pinned.contains("bg-transparent"));
        assert!(pinned.contains("bg-gray-50"));
    }

    #[test]
    fn caller_classes_merge_without_duplicates() {
        let container = container_classes(&classes!("max-w-screen-xl", "px-4"));
        assert!(container.contains("max-w-screen-xl"));
        let padding = container
            .to_string()
            .split_whitespace()
            .filter(|token| *token == "px-4")
            .count();
        assert_eq!(padding, 1);
        assert!(desktop_link_classes(&classes!("font-semibold")).contains("font-semibold"));
    }

    #[test]
    fn breakpoint_drives_responsive_classes() {
        assert!(desktop_nav_classes(MD).contains("md:flex"));
        assert!(desktop_nav_classes(MD).contains("hidden"));
        assert!(menu_button_classes(LG).contains("lg:hidden"));
        assert!(mobile_menu_classes(LG, false).contains("h-0"));
        assert!(mobile_menu_classes(LG, true).contains("h-auto"));
        assert!(!mobile_menu_classes(LG, true).contains("h-0"));
    }
}
