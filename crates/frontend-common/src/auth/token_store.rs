//! Bearer token persistence
//!
//! The token is a single browser-local slot with last-write-wins
//! semantics, handed to pages as a capability.

use std::cell::RefCell;

use crate::config::FrontendConfig;
use web_sys::Storage;

/// A single mutable slot holding at most one bearer token.
pub trait TokenStore {
    /// Currently held token, if any.
    fn get(&self) -> Option<String>;
    /// Replace the held token. Overwrites any previous value.
    fn set(&self, token: &str);
    /// Drop the held token.
    fn clear(&self);
}

/// Token store backed by `window.localStorage`.
///
/// Storage can be unavailable (private browsing, sandboxed frames); all
/// failures degrade to "no token" on read and to a no-op on write.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()
            .and_then(|s| s.get_item(FrontendConfig::TOKEN_STORAGE_KEY).ok().flatten())
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(FrontendConfig::TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(FrontendConfig::TOKEN_STORAGE_KEY);
        }
    }
}

/// In-memory token store for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_holds_one_token_last_write_wins() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("first");
        store.set("second");
        assert_eq!(store.get(), Some("second".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn with_token_seeds_the_slot() {
        let store = MemoryTokenStore::with_token("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));
    }
}
