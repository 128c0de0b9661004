//! Session Token Storage
//!
//! The bearer token is the only thing this app persists: a single
//! localStorage entry. A non-empty value is what makes the client consider
//! itself authenticated; other tabs only notice changes when they re-read
//! storage themselves.

/// localStorage key holding the session token
const TOKEN_KEY: &str = "taskdeck_token";

/// Read the stored session token. Empty values count as absent.
pub fn token() -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(TOKEN_KEY) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
    }
    None
}

/// Persist the session token.
pub fn set_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

/// Drop the session token.
pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
