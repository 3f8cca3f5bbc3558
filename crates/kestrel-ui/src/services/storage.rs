//! `localStorage` backend for string preferences.
//!
//! Values are stored raw (no JSON quoting) so the host page can read the
//! theme key before the wasm bundle loads.

use crate::core::theme::{StorageError, ThemeStore};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserStore;

impl ThemeStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
            console::error!("storage read failed", key, err);
            None
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError {
                key: key.to_string(),
                detail: err.as_string().unwrap_or_else(|| format!("{err:?}")),
            })
    }
}
