//! The session the browser remembers between page loads.
//!
//! Two raw strings in local storage, `userEmail` and `userRole`. Nothing here is
//! authenticated; the role only decides what the UI offers.

use std::cell::RefCell;
use std::collections::BTreeMap;

use gloo::console;
use gloo::storage::{LocalStorage as PersistentStorage, Storage};
use sentiment_proto::constants::{GUEST_NAME, STORAGE_USER_EMAIL, STORAGE_USER_ROLE};
use sentiment_proto::v1::Role;

/// A string key-value store that outlives the page.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self);
}

/// The browser's `localStorage`.
///
/// Values are written raw rather than JSON-encoded so they read the same from any script
/// on the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let l = PersistentStorage::raw().get_item(key).ok().flatten();
        #[cfg(debug_assertions)]
        console::debug!(format!("storage::get {} -> present={:?}", key, l.is_some()).as_str());
        l
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = PersistentStorage::raw().set_item(key, value) {
            console::error!(format!("failed to set {} -> {:?}", key, e).as_str());
        }
    }

    fn clear(&self) {
        PersistentStorage::clear();
    }
}

/// In-process store, for when there is no browser to ask.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RefCell<BTreeMap<String, String>>,
}

impl SessionStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

/// The signed-in (email, role) pair, read through whatever store it was given.
#[derive(Debug, Default)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Session { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn email(&self) -> Option<String> {
        self.store
            .get(STORAGE_USER_EMAIL)
            .filter(|e| !e.is_empty())
    }

    /// The role exactly as stored, which may not be a role we know.
    pub fn raw_role(&self) -> Option<String> {
        self.store.get(STORAGE_USER_ROLE)
    }

    pub fn role(&self) -> Option<Role> {
        self.raw_role().and_then(|r| r.parse().ok())
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Who to attribute feedback to when the form leaves the name blank.
    pub fn display_name(&self) -> String {
        self.email().unwrap_or_else(|| GUEST_NAME.to_string())
    }

    pub fn record_login(&self, email: &str, role: &str) {
        self.store.set(STORAGE_USER_EMAIL, email);
        self.store.set(STORAGE_USER_ROLE, role);
    }

    pub fn enter_as_guest(&self) {
        self.record_login(GUEST_NAME, Role::Guest.as_str());
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}
