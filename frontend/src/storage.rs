//! localStorage adapter: the session persists as one JSON blob under a
//! fixed key, the API key under another. Storage failures are logged and
//! degrade to in-memory-only operation.

use web_sys::Storage;

use pagecraft::Session;

const SESSION_KEY: &str = "pagecraft.session";
const API_KEY_KEY: &str = "pagecraft.api_key";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted session; absent or malformed data yields the empty
/// session.
pub fn load_session() -> Session {
    match local_storage().and_then(|s| s.get_item(SESSION_KEY).ok().flatten()) {
        Some(raw) => Session::from_json(&raw),
        None => Session::default(),
    }
}

/// Write the whole session. Called after every mutating session operation,
/// including when the session has become empty, so deleting the last chat
/// survives a reload.
pub fn save_session(session: &Session) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(SESSION_KEY, &session.to_json()) {
            log::warn!("Failed to persist session: {e:?}");
        }
    }
}

pub fn load_api_key() -> String {
    local_storage()
        .and_then(|s| s.get_item(API_KEY_KEY).ok().flatten())
        .unwrap_or_default()
}

/// Store the API key; an emptied field removes it.
pub fn save_api_key(key: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = if key.trim().is_empty() {
        storage.remove_item(API_KEY_KEY)
    } else {
        storage.set_item(API_KEY_KEY, key)
    };
    if let Err(e) = result {
        log::warn!("Failed to persist API key: {e:?}");
    }
}
