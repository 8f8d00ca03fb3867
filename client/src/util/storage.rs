//! Typed `localStorage` slots for visitor preferences.
//!
//! A `StoredPreference<T>` pairs a storage key with the value type kept under
//! it, so callers such as `theme_dom` declare the slot once and never handle
//! raw strings. Values are JSON. Unreadable entries are reported and treated
//! as absent; on the server every slot is empty and writes are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct StoredPreference<T> {
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> StoredPreference<T> {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key, _value: PhantomData }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<T: Serialize + DeserializeOwned> StoredPreference<T> {
    /// The stored value, if present and readable.
    pub fn load(&self) -> Option<T> {
        let raw = read_raw(self.key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring unreadable preference {}: {e}", self.key);
                None
            }
        }
    }

    /// Best-effort write; failures are logged, never surfaced.
    pub fn save(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => write_raw(self.key, &raw),
            Err(e) => log::warn!("could not encode preference {}: {e}", self.key),
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn read_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn write_raw(key: &str, raw: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(key, raw).is_err() {
        log::warn!("could not persist preference {key}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn read_raw(_key: &str) -> Option<String> {
    None
}

#[cfg(not(feature = "hydrate"))]
fn write_raw(_key: &str, _raw: &str) {}
