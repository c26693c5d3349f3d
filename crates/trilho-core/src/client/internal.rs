use std::sync::{Arc, OnceLock, RwLock};

use trilho_api::Configuration;

use super::credential::{CredentialSlot, CredentialStore};
use crate::SessionState;

/// Callback invoked after the server invalidates the session (any `401`).
///
/// The transport stays free of navigation concerns: the composition root
/// subscribes here and decides how to send the user back to the login entry
/// point.
pub trait SessionInvalidatedHandler: Send + Sync {
    /// Called once per invalidation, after the credential and the identity
    /// snapshot have been cleared.
    fn on_session_invalidated(&self);
}

#[allow(missing_docs)]
pub struct InternalClient {
    pub(crate) credential: CredentialSlot,
    pub(crate) credential_store: Arc<dyn CredentialStore>,
    pub(crate) session: RwLock<SessionState>,
    pub(crate) startup_check: OnceLock<()>,
    pub(crate) invalidated_handler: RwLock<Option<Arc<dyn SessionInvalidatedHandler>>>,
    pub(crate) configuration: Configuration,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("credential", &self.credential)
            .field("session", &self.session)
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}

impl InternalClient {
    /// Returns the active credential, if any.
    pub fn credential(&self) -> Option<String> {
        self.credential.get()
    }

    /// Replaces the active credential and persists it to the credential store.
    pub fn set_credential(&self, token: String) {
        self.credential_store.store(&token);
        self.credential.set(token);
    }

    /// Clears the active credential from memory and from the credential store.
    pub fn clear_credential(&self) {
        self.credential.clear();
        self.credential_store.clear();
    }

    /// Snapshot of the current session state.
    pub fn session_state(&self) -> SessionState {
        self.session.read().expect("RwLock is not poisoned").clone()
    }

    /// Replaces the session state wholesale.
    pub fn set_session_state(&self, state: SessionState) {
        tracing::debug!(authenticated = state.is_authenticated(), "session transition");
        *self.session.write().expect("RwLock is not poisoned") = state;
    }

    /// True iff the session holds a validated identity.
    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .expect("RwLock is not poisoned")
            .is_authenticated()
    }

    /// Marks the one startup session check as started. Returns `false` when it
    /// already ran for this client.
    pub fn begin_startup_check(&self) -> bool {
        self.startup_check.set(()).is_ok()
    }

    /// Registers the handler notified on session invalidation, replacing any
    /// previous one.
    pub fn set_session_invalidated_handler(&self, handler: Arc<dyn SessionInvalidatedHandler>) {
        *self
            .invalidated_handler
            .write()
            .expect("RwLock is not poisoned") = Some(handler);
    }

    /// Tears the session down after a `401`: clears the credential and the
    /// cached identity snapshot, then notifies the registered handler.
    pub fn invalidate_session(&self) {
        tracing::warn!("session invalidated by the server");
        self.clear_credential();
        self.set_session_state(SessionState::Unauthenticated);

        let handler = self
            .invalidated_handler
            .read()
            .expect("RwLock is not poisoned")
            .clone();
        if let Some(handler) = handler {
            handler.on_session_invalidated();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{Client, ClientSettings, InMemoryCredentialStore};

    struct CountingHandler(AtomicUsize);

    impl SessionInvalidatedHandler for CountingHandler {
        fn on_session_invalidated(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn invalidation_clears_credential_and_identity_and_notifies_once() {
        let store = Arc::new(InMemoryCredentialStore::default());
        store.store("persisted-token");
        let client = Client::new_with_credential_store(None, store.clone());

        let handler = Arc::new(CountingHandler(AtomicUsize::new(0)));
        client
            .internal
            .set_session_invalidated_handler(handler.clone());

        assert_eq!(client.internal.credential().as_deref(), Some("persisted-token"));
        client.internal.invalidate_session();

        assert_eq!(client.internal.credential(), None);
        assert_eq!(store.load(), None);
        assert_eq!(client.internal.session_state(), SessionState::Unauthenticated);
        assert_eq!(handler.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn startup_check_runs_at_most_once() {
        let client = Client::new(Some(ClientSettings::default()));
        assert!(client.internal.begin_startup_check());
        assert!(!client.internal.begin_startup_check());
    }

    #[test]
    fn set_credential_writes_through_to_the_store() {
        let store = Arc::new(InMemoryCredentialStore::default());
        let client = Client::new_with_credential_store(None, store.clone());

        client.internal.set_credential("fresh-token".to_owned());
        assert_eq!(store.load().as_deref(), Some("fresh-token"));

        client.internal.clear_credential();
        assert_eq!(store.load(), None);
        assert_eq!(client.internal.credential(), None);
    }
}
