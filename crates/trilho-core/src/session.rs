use crate::identity::Identity;

/// Authentication lifecycle of a client.
///
/// Starts in [`SessionState::Loading`] until the one startup credential check
/// resolves. Dependent views must treat `Loading` as "decision deferred" and
/// never fall back to unauthenticated while the check is pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// The startup credential check has not resolved yet.
    #[default]
    Loading,
    /// A credential was validated; the identity snapshot is current.
    Authenticated(Identity),
    /// No valid credential is present.
    Unauthenticated,
}

impl SessionState {
    /// True iff the state holds a validated identity.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
