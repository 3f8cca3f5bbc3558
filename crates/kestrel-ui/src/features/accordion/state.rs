//! Open-set tracking and class composition for accordions.

use std::collections::BTreeSet;
use yew::{Classes, classes};

/// Transition length used when the caller does not set one.
pub const DEFAULT_TRANSITION_MS: u32 = 200;

/// How many items may be expanded at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionMode {
    /// At most one open item; opening another closes the current one.
    #[default]
    Single,
    /// Each item toggles independently.
    Multiple,
}

/// Identifiers of the currently expanded items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenSet {
    open: BTreeSet<String>,
}

impl OpenSet {
    /// An empty open-set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on `id`.
    ///
    /// Single mode replaces the set with `{id}`, or empties it when `id` is
    /// already open. Multiple mode flips membership of `id`.
    #[must_use]
    pub fn toggle(&self, mode: AccordionMode, id: &str) -> Self {
        match mode {
            AccordionMode::Single => {
                let mut open = BTreeSet::new();
                if !self.open.contains(id) {
                    open.insert(id.to_string());
                }
                Self { open }
            }
            AccordionMode::Multiple => {
                let mut open = self.open.clone();
                if !open.remove(id) {
                    open.insert(id.to_string());
                }
                Self { open }
            }
        }
    }

    /// Whether `id` is expanded.
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Number of expanded items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Expanded identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}

/// Identifier for the item at `index`, using the caller's id when present.
#[must_use]
pub fn resolve_item_id(id: Option<&str>, index: usize) -> String {
    id.filter(|id| !id.trim().is_empty())
        .map_or_else(|| format!("item-{index}"), str::to_string)
}

const TITLE_BASE: &str = "accordion-title flex items-center justify-between w-full py-3 px-4 \
                          text-left font-medium focus:outline-none transition-colors";
const TITLE_FLAT: &str =
    "hover:bg-gray-50 focus:bg-gray-50 dark:hover:bg-gray-800 dark:focus:bg-gray-800";
const TITLE_BORDERED: &str = "bg-white dark:bg-gray-900";
const TITLE_OPEN: &str = "text-blue-600 dark:text-blue-400";
const TITLE_CLOSED: &str = "text-gray-900 dark:text-gray-100";
const CONTENT_BORDERED: &str = "border-t border-gray-200 dark:border-gray-700";

/// Caller class overrides and cosmetic flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionStyle {
    /// Extra classes for every item wrapper.
    pub item_class: Classes,
    /// Extra classes for every title button.
    pub title_class: Classes,
    /// Extra classes for every content panel.
    pub content_class: Classes,
    /// Transition length in milliseconds.
    pub transition_ms: u32,
    /// Draw borders around items.
    pub bordered: bool,
}

impl AccordionStyle {
    fn duration(&self) -> String {
        format!("duration-{}", self.transition_ms)
    }

    /// Classes for the item wrapper at `index` of `count`.
    #[must_use]
    pub fn item_classes(&self, index: usize, count: usize) -> Classes {
        let is_last = index + 1 == count;
        classes!(
            "accordion-item",
            self.item_class.clone(),
            self.bordered.then_some("border"),
            (self.bordered && !is_last).then_some("border-b-0"),
            "dark:border-gray-700",
        )
    }

    /// Classes for the title button.
    #[must_use]
    pub fn title_classes(&self, open: bool) -> Classes {
        classes!(
            TITLE_BASE,
            (!self.bordered).then_some(TITLE_FLAT),
            self.bordered.then_some(TITLE_BORDERED),
            self.title_class.clone(),
            if open { TITLE_OPEN } else { TITLE_CLOSED },
        )
    }

    /// Classes for the chevron icon.
    #[must_use]
    pub fn chevron_classes(&self, open: bool) -> Classes {
        classes!(
            "h-5",
            "w-5",
            "transform",
            "transition-transform",
            open.then_some("rotate-180"),
            self.duration(),
            "text-gray-500",
            "dark:text-gray-400",
        )
    }

    /// Classes for the content panel.
    #[must_use]
    pub fn content_classes(&self, open: bool) -> Classes {
        classes!(
            "accordion-content",
            "overflow-hidden",
            "transition-height",
            self.duration(),
            "ease-in-out",
            self.content_class.clone(),
            if open { "block" } else { "hidden" },
            self.bordered.then_some(CONTENT_BORDERED),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_all(mode: AccordionMode, clicks: &[&str]) -> OpenSet {
        clicks
            .iter()
            .fold(OpenSet::new(), |set, id| set.toggle(mode, id))
    }

    #[test]
    fn single_mode_parity_decides_open_state() {
        for count in 1..=6 {
            let clicks = vec!["a"; count];
            let set = click_all(AccordionMode::Single, &clicks);
            assert_eq!(set.is_open("a"), count % 2 == 1, "after {count} clicks");
        }
    }

    #[test]
    fn single_mode_replaces_open_item() {
        let set = click_all(AccordionMode::Single, &["a", "b"]);
        assert!(!set.is_open("a"));
        assert!(set.is_open("b"));
        assert_eq!(set.len(), 1);

        let set = set.toggle(AccordionMode::Single, "b");
        assert!(set.is_empty());
    }

    #[test]
    fn multiple_mode_keeps_ids_clicked_odd_times() {
        let clicks = ["a", "b", "c", "a", "c", "c", "d", "d"];
        let set = click_all(AccordionMode::Multiple, &clicks);
        assert_eq!(set.ids().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn paired_clicks_are_idempotent() {
        let start = click_all(AccordionMode::Multiple, &["x", "y"]);
        let after = start
            .toggle(AccordionMode::Multiple, "z")
            .toggle(AccordionMode::Multiple, "z");
        assert_eq!(start, after);
    }

    #[test]
    fn missing_ids_fall_back_to_position() {
        assert_eq!(resolve_item_id(Some("faq"), 3), "faq");
        assert_eq!(resolve_item_id(None, 2), "item-2");
        assert_eq!(resolve_item_id(Some("  "), 0), "item-0");
    }

    #[test]
    fn bordered_items_drop_bottom_border_except_last() {
        let style = AccordionStyle {
            bordered: true,
            transition_ms: DEFAULT_TRANSITION_MS,
            ..AccordionStyle::default()
        };
        assert!(style.item_classes(0, 3).contains("border-b-0"));
        assert!(!style.item_classes(2, 3).contains("border-b-0"));
        assert!(style.item_classes(2, 3).contains("border"));
        assert!(style.content_classes(true).contains("border-t"));
        assert!(style.title_classes(false).contains("bg-white"));
    }

    #[test]
    fn caller_overrides_do_not_repeat_tokens() {
        let style = AccordionStyle {
            item_class: classes!("border", "rounded"),
            bordered: true,
            ..AccordionStyle::default()
        };
        let rendered = style.item_classes(0, 1).to_string();
        let borders = rendered
            .split_whitespace()
            .filter(|token| *token == "border")
            .count();
        assert_eq!(borders, 1);
        assert!(style.item_classes(0, 1).contains("rounded"));
    }

    #[test]
    fn open_state_drives_visibility_and_rotation() {
        let style = AccordionStyle {
            transition_ms: 350,
            content_class: classes!("px-2"),
            ..AccordionStyle::default()
        };
        let open = style.content_classes(true);
        assert!(open.contains("block"));
        assert!(!open.contains("hidden"));
        assert!(open.contains("duration-350"));
        assert!(open.contains("px-2"));
        assert!(style.content_classes(false).contains("hidden"));
        assert!(style.chevron_classes(true).contains("rotate-180"));
        assert!(style.chevron_classes(true).contains("duration-350"));
        assert!(!style.chevron_classes(false).contains("rotate-180"));
        assert!(style.title_classes(true).contains("text-blue-600"));
        assert!(!style.title_classes(true).contains("text-gray-900"));
        assert!(style.title_classes(false).contains("hover:bg-gray-50"));
    }
}
