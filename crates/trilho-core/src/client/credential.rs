use std::sync::{Arc, RwLock};

/// Persistence hook for the bearer credential.
///
/// Exactly one credential is active at a time; replacing or clearing it is an
/// atomic, whole-value operation. The SDK ships an in-memory implementation;
/// host applications provide a durable store scoped to the user profile
/// (keychain, config file, browser storage).
pub trait CredentialStore: Send + Sync {
    /// Reads the persisted credential, if any. Called once at client
    /// construction to restore the previous session.
    fn load(&self) -> Option<String>;
    /// Persists `token` as the active credential, replacing any previous one.
    fn store(&self, token: &str);
    /// Removes the persisted credential.
    fn clear(&self);
}

/// A [`CredentialStore`] that keeps the credential in process memory only.
/// Useful for testing and for hosts that do not persist sessions.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    slot: RwLock<Option<String>>,
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.slot.read().expect("RwLock is not poisoned").clone()
    }

    fn store(&self, token: &str) {
        *self.slot.write().expect("RwLock is not poisoned") = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.write().expect("RwLock is not poisoned") = None;
    }
}

/// In-memory slot holding the active credential, shared between the client
/// state and the bearer middleware.
#[derive(Clone, Default)]
pub(crate) struct CredentialSlot(Arc<RwLock<Option<String>>>);

impl CredentialSlot {
    pub(crate) fn get(&self) -> Option<String> {
        self.0.read().expect("RwLock is not poisoned").clone()
    }

    pub(crate) fn set(&self, token: String) {
        *self.0.write().expect("RwLock is not poisoned") = Some(token);
    }

    pub(crate) fn clear(&self) {
        *self.0.write().expect("RwLock is not poisoned") = None;
    }
}

impl std::fmt::Debug for CredentialSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The credential itself must never end up in logs.
        let state = if self.get().is_some() { "<set>" } else { "<empty>" };
        f.debug_tuple("CredentialSlot").field(&state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_a_whole_value_replace() {
        let store = InMemoryCredentialStore::default();
        assert_eq!(store.load(), None);

        store.store("first-token");
        assert_eq!(store.load().as_deref(), Some("first-token"));

        store.store("second-token");
        assert_eq!(store.load().as_deref(), Some("second-token"));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn slot_debug_never_prints_the_token() {
        let slot = CredentialSlot::default();
        slot.set("very-secret".to_owned());
        let formatted = format!("{slot:?}");
        assert!(!formatted.contains("very-secret"));
    }
}
