//! Browser-backed [`KeyValueStore`] over `localStorage` and `sessionStorage`.
use gloo::storage::{LocalStorage, SessionStorage, Storage};
use policyplay_core::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserStore {
    /// Survives reloads; holds the auth token and cached user.
    Local,
    /// Cleared with the tab; carries results between pages.
    Session,
}

#[derive(Debug, thiserror::Error)]
#[error("browser storage error: {0}")]
pub struct BrowserStoreError(String);

impl BrowserStore {
    fn raw(self) -> web_sys::Storage {
        match self {
            Self::Local => LocalStorage::raw(),
            Self::Session => SessionStorage::raw(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    type Error = BrowserStoreError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.raw()
            .get_item(key)
            .map_err(|err| BrowserStoreError(crate::dom::js_error_message(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.raw()
            .set_item(key, value)
            .map_err(|err| BrowserStoreError(crate::dom::js_error_message(&err)))
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        self.raw()
            .remove_item(key)
            .map_err(|err| BrowserStoreError(crate::dom::js_error_message(&err)))
    }
}
