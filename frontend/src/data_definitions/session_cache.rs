//! Browser-local key/value cache used to hand records between pages.
//!
//! Components never touch `localStorage` directly: the store is provided
//! through context as a [`SessionCache`], so it can be swapped in tests.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use dioxus::logger::tracing;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub const SESSION_KEY_USER: &str = "user";
pub const SESSION_KEY_MENTOR: &str = "mentor";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`; does nothing outside the browser.
#[derive(Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserSessionStore {
    #[cfg(target_arch = "wasm32")]
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, dropping session entry {key:?}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!("failed to write session entry {key:?}: {e:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set(&self, key: &str, _value: &str) {
        tracing::debug!("no browser storage, dropping session entry {key:?}");
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Cloneable handle to the session store, shared through context.
#[derive(Clone)]
pub struct SessionCache(Rc<dyn SessionStore>);

impl SessionCache {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn browser() -> Self {
        Self::new(BrowserSessionStore)
    }

    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.0.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring unreadable session entry {key:?}: {e}");
                None
            }
        }
    }

    /// Last write wins.
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.0.set(key, &raw),
            Err(e) => tracing::error!("failed to serialize session entry {key:?}: {e}"),
        }
    }
}

/// The signed-in user as cached by the login flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    pub fn label(&self) -> &str {
        self.display_name.as_deref().or(self.email.as_deref()).unwrap_or(&self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_result::MentorRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn mentor_record_survives_the_handoff() {
        let cache = SessionCache::new(MemorySessionStore::default());
        let mentor: MentorRecord = serde_json::from_value(serde_json::json!({
            "name": "Lakshmi",
            "qualifications": [{ "type": "guru_shishya_parampara" }],
            "languages": ["ta", "en"]
        }))
        .unwrap();

        cache.write_json(SESSION_KEY_MENTOR, &mentor);

        assert_eq!(cache.read_json::<MentorRecord>(SESSION_KEY_MENTOR), Some(mentor));
    }

    #[test]
    fn later_write_replaces_earlier() {
        let cache = SessionCache::new(MemorySessionStore::default());
        cache.write_json(SESSION_KEY_USER, &serde_json::json!({ "uid": "u-1" }));
        cache.write_json(SESSION_KEY_USER, &serde_json::json!({ "uid": "u-2", "email": "b@example.com" }));

        let user = cache.read_json::<SessionUser>(SESSION_KEY_USER).unwrap();
        assert_eq!(user.uid, "u-2");
        assert_eq!(user.label(), "b@example.com");
    }

    #[test]
    fn garbage_entries_read_as_missing() {
        let store = MemorySessionStore::default();
        store.set(SESSION_KEY_USER, "{not json");
        let cache = SessionCache::new(store);

        assert_eq!(cache.read_json::<SessionUser>(SESSION_KEY_USER), None);
        assert_eq!(cache.read_json::<SessionUser>("missing"), None);
    }
}
