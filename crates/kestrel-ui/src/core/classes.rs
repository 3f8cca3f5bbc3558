//! Class composition helpers shared by the widgets.

use yew::Classes;

/// Merge a base utility string with caller-provided classes.
///
/// Tokens already present in `base` are kept once.
#[must_use]
pub fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    let mut classes = Classes::from(base);
    if !extra.is_empty() {
        classes.push(extra.clone());
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::merge_classes;
    use yew::{Classes, classes};

    #[test]
    fn base_comes_first_and_extras_follow() {
        let merged = merge_classes("block  text-sm", &classes!("w-full"));
        assert_eq!(merged.to_string(), "block text-sm w-full");
    }

    #[test]
    fn duplicate_tokens_collapse() {
        let merged = merge_classes("block text-sm", &classes!("text-sm", "block", "mt-2"));
        assert_eq!(merged.to_string(), "block text-sm mt-2");
    }

    #[test]
    fn empty_extras_leave_base_untouched() {
        let merged = merge_classes("block", &Classes::new());
        assert!(merged.contains("block"));
        assert_eq!(merged.to_string(), "block");
    }
}
