//! Session Storage Helpers
//!
//! JSON persistence in `window.sessionStorage`. Reads fail open: a missing or
//! corrupt value degrades to the caller's default instead of erroring, so a
//! bad entry can never take the page down. Tabs of the same session share
//! these keys; concurrent writes are last-write-wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

/// Guest cart key
pub const CART_KEY: &str = "kainan.cart";
/// Pending toast queue key
pub const TOAST_KEY: &str = "kainan.toasts";

fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Read and decode a JSON value; `None` when absent or unreadable.
pub fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = session_storage()?;
    let raw = storage.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            web_sys::console::warn_1(
                &format!("discarding corrupt '{}' entry: {}", key, err).into(),
            );
            let _ = storage.remove_item(key);
            None
        }
    }
}

/// Encode and write a JSON value; best effort.
pub fn write_json<T: Serialize>(key: &str, value: &T) {
    if let Some(storage) = session_storage() {
        if let Ok(raw) = serde_json::to_string(value) {
            let _ = storage.set_item(key, &raw);
        }
    }
}

/// Drop a key entirely.
pub fn remove(key: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(key);
    }
}
