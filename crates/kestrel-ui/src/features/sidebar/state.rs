//! Expanded/collapsed layout rules for the sidebar and its items.

use yew::{Classes, classes};

const PROFILE_BASE: &str = "flex justify-between items-center overflow-hidden transition-all";
const ALERT_BASE: &str =
    "absolute right-2 w-2 h-2 bg-indigo-500 rounded-full overflow-hidden transition-all";
const ITEM_BASE: &str = "relative flex items-center py-2 px-3 my-1 font-medium rounded-md \
                         cursor-pointer transition-colors group";
const ITEM_ACTIVE: &str = "bg-gradient-to-tr from-indigo-200 to-indigo-100 text-indigo-800";
const ITEM_IDLE: &str = "hover:bg-slate-100 text-slate-700";

/// Expanded flag shared with sidebar items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    /// Whether labels are shown next to icons.
    pub expanded: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl SidebarState {
    /// Flip between expanded and collapsed.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    /// Width of the `<aside>` element.
    #[must_use]
    pub fn aside_classes(self) -> Classes {
        classes!(
            "h-screen",
            "transition-all",
            if self.expanded { "w-64" } else { "w-17" },
        )
    }

    /// Header logo shrinks to nothing when collapsed.
    #[must_use]
    pub fn logo_classes(self) -> Classes {
        classes!(
            "overflow-hidden",
            "transition-all",
            if self.expanded { "w-32" } else { "w-0" },
        )
    }

    /// Footer name/email block.
    #[must_use]
    pub fn profile_classes(self) -> Classes {
        classes!(
            PROFILE_BASE,
            if self.expanded { "w-56 ml-3" } else { "w-0" },
        )
    }

    /// Item label next to the icon.
    #[must_use]
    pub fn label_classes(self) -> Classes {
        classes!(
            "overflow-hidden",
            "transition-all",
            if self.expanded { "w-52 ml-3" } else { "w-0" },
        )
    }

    /// Alert dot; pinned to the top corner when collapsed.
    #[must_use]
    pub fn alert_classes(self) -> Classes {
        classes!(ALERT_BASE, (!self.expanded).then_some("top-2"))
    }

    /// Hover tooltip replaces the hidden label while collapsed.
    #[must_use]
    pub const fn shows_tooltip(self) -> bool {
        !self.expanded
    }
}

/// Row classes for an item.
#[must_use]
pub fn item_classes(active: bool) -> Classes {
    classes!(
        ITEM_BASE,
        if active { ITEM_ACTIVE } else { ITEM_IDLE },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded_and_toggles() {
        let state = SidebarState::default();
        assert!(state.expanded);
        assert!(!state.toggled().expanded);
        assert_eq!(state.toggled().toggled(), state);
    }

    #[test]
    fn collapsed_layout_hides_labels() {
        let collapsed = SidebarState { expanded: false };
        assert!(collapsed.aside_classes().contains("w-17"));
        assert!(collapsed.label_classes().contains("w-0"));
        assert!(!collapsed.label_classes().contains("ml-3"));
        assert!(collapsed.logo_classes().contains("w-0"));
        assert!(collapsed.profile_classes().contains("w-0"));
        assert!(collapsed.alert_classes().contains("top-2"));
        assert!(collapsed.shows_tooltip());
    }

    #[test]
    fn expanded_layout_shows_labels() {
        let expanded = SidebarState::default();
        assert!(expanded.aside_classes().contains("w-64"));
        assert!(expanded.label_classes().contains("ml-3"));
        assert!(expanded.profile_classes().contains("w-56"));
        assert!(!expanded.alert_classes().contains("top-2"));
        assert!(!expanded.shows_tooltip());
    }

    #[test]
    fn active_items_use_gradient() {
        assert!(item_classes(true).contains("from-indigo-200"));
        assert!(!item_classes(true).contains("hover:bg-slate-100"));
        assert!(item_classes(false).contains("hover:bg-slate-100"));
        assert!(item_classes(false).contains("group"));
    }
}
