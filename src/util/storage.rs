//! Browser localStorage mirror of the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store owns login state in memory; these helpers keep the
//! durable copy the HTTP layer reads credentials from and that
//! `Session::restore` rebuilds from after a reload. Hydrate-only: on other
//! targets reads yield `None` and writes are no-ops.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Key holding the long-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Key holding the JSON-encoded profile of the signed-in user.
pub const USER_KEY: &str = "user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a raw string value for `key`.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value for `key`.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load a JSON value from localStorage for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = read(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to localStorage for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    write(key, &raw);
}

/// Remove every session key. Scoped removal, not `Storage::clear`, so
/// unrelated UI preferences survive a logout.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
