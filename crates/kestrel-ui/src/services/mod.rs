//! Browser adapters for the DOM-free seams in [`crate::core`].
pub(crate) mod storage;
