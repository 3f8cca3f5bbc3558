//! Light/dark theme preference and its persistence seam.
//!
//! # Design
//! - The preference is a single string value under a caller-chosen key.
//! - Storage sits behind [`ThemeStore`] so the toggle logic is testable
//!   without a browser; the wasm build plugs in `localStorage`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use yew::Classes;

/// Storage key used when the caller does not pick one.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Colour scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// Stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human label of the mode a toggle would switch to.
    #[must_use]
    pub const fn switch_label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }

    /// Whether the document root should carry [`DARK_CLASS`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Stored value that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme value `{0}`")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Failure writing a preference to storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to persist `{key}`: {detail}")]
pub struct StorageError {
    /// Key being written.
    pub key: String,
    /// Backend-specific failure text.
    pub detail: String,
}

/// Key-value storage for string preferences.
pub trait ThemeStore {
    /// Read the raw value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend rejects the write (quota,
    /// disabled storage).
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Resolve the mode to show on mount: the stored value when it parses,
/// otherwise `fallback`.
#[must_use]
pub fn load_theme(store: &impl ThemeStore, key: &str, fallback: ThemeMode) -> ThemeMode {
    store
        .load(key)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(fallback)
}

/// Storage key and fallback a toggle reads its preference from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeSource {
    key: String,
    fallback: ThemeMode,
}

impl ThemeSource {
    /// Source reading `key`, with `fallback` for missing or unknown values.
    #[must_use]
    pub fn new(key: impl Into<String>, fallback: ThemeMode) -> Self {
        Self {
            key: key.into(),
            fallback,
        }
    }

    /// Read the preference through [`load_theme`].
    #[must_use]
    pub fn load(&self, store: &impl ThemeStore) -> ThemeMode {
        load_theme(store, &self.key, self.fallback)
    }

    /// Point the source at `key` and `fallback`. Returns `false` when both are
    /// unchanged, in which case the loaded mode is still current.
    pub fn retarget(&mut self, key: &str, fallback: ThemeMode) -> bool {
        if self.key == key && self.fallback == fallback {
            return false;
        }
        key.clone_into(&mut self.key);
        self.fallback = fallback;
        true
    }
}

/// Persist `mode` under `key`.
///
/// # Errors
/// Propagates the [`StorageError`] from the backend.
pub fn persist_theme(
    store: &impl ThemeStore,
    key: &str,
    mode: ThemeMode,
) -> Result<(), StorageError> {
    store.save(key, mode.as_str())
}

/// Flip `current`, persist the result and return it. The returned mode is
/// applied even when the write fails.
///
/// # Errors
/// Returns the next mode together with the [`StorageError`] on write failure.
pub fn toggle_theme(
    store: &impl ThemeStore,
    key: &str,
    current: ThemeMode,
) -> Result<ThemeMode, (ThemeMode, StorageError)> {
    let next = current.toggled();
    persist_theme(store, key, next).map_err(|err| (next, err))?;
    Ok(next)
}

/// Button size presets for the toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleSize {
    /// Small (28px).
    Sm,
    /// Medium (32px).
    #[default]
    Md,
    /// Large (40px).
    Lg,
}

impl ToggleSize {
    /// Height/width utilities for the size.
    #[must_use]
    pub fn classes(self) -> Classes {
        Classes::from(match self {
            Self::Sm => "h-7 w-7",
            Self::Md => "h-8 w-8",
            Self::Lg => "h-10 w-10",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        reads: Cell<usize>,
        read_only: bool,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.reads.set(self.reads.get() + 1);
            self.values.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError {
                    key: key.to_string(),
                    detail: "quota exceeded".to_string(),
                });
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        assert_eq!(ThemeMode::Light.switch_label(), "Dark");
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ThemeParseError("sepia".to_string()))
        );
    }

    #[test]
    fn load_falls_back_when_missing_or_invalid() {
        let store = MemoryStore::default();
        assert_eq!(
            load_theme(&store, DEFAULT_THEME_KEY, ThemeMode::Dark),
            ThemeMode::Dark
        );
        store.save(DEFAULT_THEME_KEY, "purple").ok();
        assert_eq!(
            load_theme(&store, DEFAULT_THEME_KEY, ThemeMode::Light),
            ThemeMode::Light
        );
        store.save(DEFAULT_THEME_KEY, "dark").ok();
        assert_eq!(
            load_theme(&store, DEFAULT_THEME_KEY, ThemeMode::Light),
            ThemeMode::Dark
        );
    }

    #[test]
    fn toggling_twice_restores_persisted_value() {
        let store = MemoryStore::default();
        persist_theme(&store, "ui.theme", ThemeMode::Light).ok();
        let once = toggle_theme(&store, "ui.theme", ThemeMode::Light);
        assert_eq!(once, Ok(ThemeMode::Dark));
        assert_eq!(store.load("ui.theme").as_deref(), Some("dark"));
        let twice = toggle_theme(&store, "ui.theme", ThemeMode::Dark);
        assert_eq!(twice, Ok(ThemeMode::Light));
        assert_eq!(store.load("ui.theme").as_deref(), Some("light"));
    }

    #[test]
    fn toggle_reports_write_failure_with_next_mode() {
        let store = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };
        let Err((next, err)) = toggle_theme(&store, "theme", ThemeMode::Dark) else {
            panic!("expected write failure");
        };
        assert_eq!(next, ThemeMode::Light);
        assert_eq!(err.key, "theme");
    }

    #[test]
    fn unchanged_source_is_read_once() {
        let store = MemoryStore::default();
        store.save(DEFAULT_THEME_KEY, "dark").ok();
        let mut source = ThemeSource::new(DEFAULT_THEME_KEY, ThemeMode::Light);
        assert_eq!(source.load(&store), ThemeMode::Dark);
        assert!(!source.retarget(DEFAULT_THEME_KEY, ThemeMode::Light));
        assert_eq!(store.reads.get(), 1);

        assert!(source.retarget("ui.theme", ThemeMode::Light));
        assert_eq!(source.load(&store), ThemeMode::Light);
        assert!(source.retarget("ui.theme", ThemeMode::Dark));
        assert_eq!(source.load(&store), ThemeMode::Dark);
        assert_eq!(store.reads.get(), 3);
    }

    #[test]
    fn size_classes() {
        assert!(ToggleSize::Sm.classes().contains("h-7"));
        assert!(ToggleSize::Sm.classes().contains("w-7"));
        assert!(ToggleSize::default().classes().contains("h-8"));
        assert!(ToggleSize::Lg.classes().contains("w-10"));
        assert_eq!(ToggleSize::Lg.classes(), Classes::from("h-10 w-10"));
    }
}
