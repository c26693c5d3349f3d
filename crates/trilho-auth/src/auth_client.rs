use trilho_core::Client;

use crate::{
    registration::{RegistrationClient, RegistrationOptions},
    session::SessionClient,
};

/// Subclient containing authentication and session functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` over the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Client for the session lifecycle: startup restore, login, logout.
    pub fn session(&self) -> SessionClient {
        SessionClient::new(self.client.clone())
    }

    /// Client for the two-step account registration workflow.
    pub fn registration(&self, options: RegistrationOptions) -> RegistrationClient {
        RegistrationClient::new(self.client.clone(), options)
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient::new(self.clone())
    }
}
