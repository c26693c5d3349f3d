//! Session lifecycle operations: startup restore, login and logout.

mod redirect;

pub use redirect::{RedirectTarget, redirect_target};

use tracing::warn;
use trilho_core::{AccountType, Client, Identity, SessionState};
use uuid::Uuid;

use crate::api::{
    self,
    request::LoginRequest,
    response::{LoginPayload, MeClaims},
};

/// Generic message for login failures that carry no server message.
const LOGIN_FAILED: &str = "Could not sign in. Try again.";

/// Client driving the session lifecycle of a Trilho [`Client`].
///
/// The session starts in [`SessionState::Loading`]; call
/// [`SessionClient::initialize`] once at startup to settle it. All state is
/// held by the underlying client, so every `SessionClient` handle observes the
/// same session.
#[derive(Clone)]
pub struct SessionClient {
    pub(crate) client: Client,
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// The session is established. Carries what the composition root needs to
    /// pick a redirect target.
    Authenticated {
        /// Resolved account class (wire `type` field, defaulting to tenant).
        account_type: AccountType,
        /// Tenant identifier, when the account is bound to one.
        tenant_id: Option<Uuid>,
    },
    /// The attempt failed; the session state is unchanged.
    Rejected {
        /// Server-provided message, or a generic fallback.
        message: String,
    },
}

impl SessionClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Restores the session from the persisted credential.
    ///
    /// Runs at most once per client. With no credential present the session
    /// settles to unauthenticated without any network call; otherwise the
    /// credential is validated against `/auth/me` and cleared when the check
    /// fails.
    pub async fn initialize(&self) {
        let internal = &self.client.internal;
        if !internal.begin_startup_check() {
            tracing::debug!("startup session check already ran");
            return;
        }

        if internal.credential().is_none() {
            internal.set_session_state(SessionState::Unauthenticated);
            return;
        }

        let envelope = api::auth_me_get(&self.client).await;
        let identity = if envelope.success {
            envelope
                .data
                .and_then(|data| match serde_json::from_value::<MeClaims>(data) {
                    Ok(claims) => Some(claims),
                    Err(e) => {
                        warn!("malformed whoami payload: {e}");
                        None
                    }
                })
                .and_then(|claims| match claims.into_identity() {
                    Ok(identity) => Some(identity),
                    Err(e) => {
                        warn!("discarding session restore: {e}");
                        None
                    }
                })
        } else {
            None
        };

        match identity {
            Some(identity) => internal.set_session_state(SessionState::Authenticated(identity)),
            None => {
                internal.clear_credential();
                internal.set_session_state(SessionState::Unauthenticated);
            }
        }
    }

    /// Signs in with email and password.
    ///
    /// On success the returned token becomes the active credential and the
    /// identity snapshot is replaced; on failure nothing changes and the
    /// failure message is returned to the caller.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let request = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let envelope = api::auth_login_post(&self.client, &request).await;

        let payload = match self.accept_login_payload(envelope) {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };

        let tenant_id = payload
            .tenant_id
            .or_else(|| payload.tenant.as_ref().and_then(|tenant| tenant.uuid));

        let identity = match payload.into_identity() {
            Ok(identity) => identity,
            Err(e) => {
                warn!("malformed login payload: {e}");
                return LoginOutcome::Rejected {
                    message: LOGIN_FAILED.to_owned(),
                };
            }
        };

        self.establish(identity, tenant_id)
    }

    /// Signs in a platform administrator via the dedicated endpoint. The
    /// account class is forced to admin and no tenant reference is attached.
    pub async fn admin_login(&self, email: &str, password: &str) -> LoginOutcome {
        let request = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let envelope = api::auth_admin_login_post(&self.client, &request).await;

        let payload = match self.accept_login_payload(envelope) {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };

        let identity = match payload.into_admin_identity() {
            Ok(identity) => identity,
            Err(e) => {
                warn!("malformed login payload: {e}");
                return LoginOutcome::Rejected {
                    message: LOGIN_FAILED.to_owned(),
                };
            }
        };

        self.establish(identity, None)
    }

    /// Signs out: clears the credential and settles to unauthenticated.
    /// Observable immediately, and idempotent.
    pub fn logout(&self) {
        self.client.internal.clear_credential();
        self.client
            .internal
            .set_session_state(SessionState::Unauthenticated);
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.client.internal.session_state()
    }

    /// The current identity, when authenticated.
    pub fn current_user(&self) -> Option<Identity> {
        match self.state() {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// True iff the session holds a validated identity.
    pub fn is_authenticated(&self) -> bool {
        self.client.internal.is_authenticated()
    }

    /// Extracts the login payload from a response envelope, persisting the
    /// returned token as the active credential. A failed or malformed
    /// response becomes the [`LoginOutcome::Rejected`] to return.
    fn accept_login_payload(
        &self,
        envelope: trilho_api::ApiResponse,
    ) -> Result<LoginPayload, LoginOutcome> {
        if !envelope.success {
            return Err(LoginOutcome::Rejected {
                message: envelope.error_message().unwrap_or(LOGIN_FAILED).to_owned(),
            });
        }

        let rejected = || LoginOutcome::Rejected {
            message: LOGIN_FAILED.to_owned(),
        };
        let payload = envelope
            .data
            .ok_or_else(rejected)
            .and_then(|data| {
                serde_json::from_value::<LoginPayload>(data).map_err(|e| {
                    warn!("malformed login payload: {e}");
                    rejected()
                })
            })?;

        if let Some(token) = payload.token.clone() {
            self.client.internal.set_credential(token);
        }

        Ok(payload)
    }

    fn establish(&self, identity: Identity, tenant_id: Option<Uuid>) -> LoginOutcome {
        let account_type = identity.account_type;
        self.client
            .internal
            .set_session_state(SessionState::Authenticated(identity));
        LoginOutcome::Authenticated {
            account_type,
            tenant_id,
        }
    }
}
