//! Session gate and the store it reads.
//!
//! The store is an injected key-value abstraction so pages never touch
//! ambient global state and tests can substitute their own. Three markers
//! describe one identity: the signed-in flag, the identity token and the
//! role tag. They are set together and cleared together.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Presence flag written on successful sign-in or sign-up.
pub const USER_FLAG_KEY: &str = "user";
/// The identity token the profile fetch authenticates with.
pub const TOKEN_KEY: &str = "id";
/// The signed-in account's role tag.
pub const ROLE_KEY: &str = "role";

const SESSION_KEYS: [&str; 3] = [USER_FLAG_KEY, TOKEN_KEY, ROLE_KEY];

/// Opaque key-value session storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Remove several keys as one observable step. The default removes them
    /// one by one; stores that can do better should.
    fn clear(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}

/// Process-local store; all the client needs.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    // One write lock for the whole batch: no reader can observe a
    // partially cleared session.
    fn clear(&self, keys: &[&str]) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for key in keys {
            entries.remove(*key);
        }
    }
}

/// Result of the pre-render session check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Authorized { token: String },
    Unauthorized,
}

/// Gate a protected page. Both the signed-in flag and the identity token
/// must be present; anything less means redirect to sign-in without
/// touching the network.
pub fn check_session(store: &dyn SessionStore) -> SessionState {
    match (store.get(USER_FLAG_KEY), store.get(TOKEN_KEY)) {
        (Some(_), Some(token)) => SessionState::Authorized { token },
        _ => SessionState::Unauthorized,
    }
}

/// Record a fresh identity. All three markers in one go.
pub fn establish_session(store: &dyn SessionStore, token: &str, role: &str) {
    store.set(TOKEN_KEY, token);
    store.set(USER_FLAG_KEY, "true");
    store.set(ROLE_KEY, role);
}

/// Drop the identity. Runs on explicit sign-out and when the API rejects
/// the token mid-session.
pub fn logout(store: &dyn SessionStore) {
    tracing::debug!("clearing session markers");
    store.clear(&SESSION_KEYS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_markers_present_authorizes() {
        let store = MemorySessionStore::new();
        establish_session(&store, "tok-1", "admin");

        assert_eq!(
            check_session(&store),
            SessionState::Authorized {
                token: "tok-1".to_string()
            }
        );
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("admin"));
    }

    #[test]
    fn either_marker_missing_is_unauthorized() {
        let store = MemorySessionStore::new();
        assert_eq!(check_session(&store), SessionState::Unauthorized);

        store.set(USER_FLAG_KEY, "true");
        assert_eq!(check_session(&store), SessionState::Unauthorized);

        store.remove(USER_FLAG_KEY);
        store.set(TOKEN_KEY, "tok-1");
        assert_eq!(check_session(&store), SessionState::Unauthorized);
    }

    #[test]
    fn logout_clears_every_marker() {
        let store = MemorySessionStore::new();
        establish_session(&store, "tok-1", "sub-admin");

        logout(&store);

        assert_eq!(check_session(&store), SessionState::Unauthorized);
        assert_eq!(store.get(USER_FLAG_KEY), None);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(ROLE_KEY), None);
    }

    #[test]
    fn clear_only_touches_named_keys() {
        let store = MemorySessionStore::new();
        store.set("unrelated", "keep");
        establish_session(&store, "tok-1", "user");

        logout(&store);

        assert_eq!(store.get("unrelated").as_deref(), Some("keep"));
    }
}
