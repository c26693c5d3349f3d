use std::sync::{Arc, OnceLock, RwLock};

use reqwest::Method;
use serde::Serialize;
use trilho_api::{ApiError, ApiResponse, Configuration, send_api_request};

use super::internal::InternalClient;
use crate::{
    SessionState,
    client::{
        client_settings::ClientSettings,
        credential::{CredentialSlot, CredentialStore, InMemoryCredentialStore},
        middleware::BearerAuthMiddleware,
    },
};

/// The main struct to interact with the Trilho SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so all mutable state lives behind an Arc as part of the
    // [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Trilho client with an in-memory credential store.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        Self::new_with_credential_store(settings, Arc::new(InMemoryCredentialStore::default()))
    }

    /// Create a new Trilho client backed by a host-provided credential store.
    ///
    /// The store is read once here; a persisted credential becomes the active
    /// credential until it is replaced or cleared.
    pub fn new_with_credential_store(
        settings: Option<ClientSettings>,
        credential_store: Arc<dyn CredentialStore>,
    ) -> Self {
        let settings = settings.unwrap_or_default();

        let credential = CredentialSlot::default();
        if let Some(token) = credential_store.load() {
            credential.set(token);
        }

        let http_client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .expect("HTTP client build should not fail");
        let http_client = reqwest_middleware::ClientBuilder::new(http_client)
            .with(BearerAuthMiddleware {
                credential: credential.clone(),
            })
            .build();

        let configuration = Configuration {
            base_path: settings.api_url,
            client: http_client,
        };

        Self {
            internal: Arc::new(InternalClient {
                credential,
                credential_store,
                session: RwLock::new(SessionState::Loading),
                startup_check: OnceLock::new(),
                invalidated_handler: RwLock::new(None),
                configuration,
            }),
        }
    }

    /// Sends a request and returns the raw transport result.
    ///
    /// A `401` tears the session down before the error is returned, so the
    /// in-flight caller can still surface its own message while the
    /// invalidation handler runs.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let result = send_api_request(&self.internal.configuration, method, path, body).await;
        if let Err(ApiError::Unauthorized) = &result {
            self.internal.invalidate_session();
        }
        result
    }

    /// `GET` returning the uniform envelope; failures never escape as errors.
    pub async fn get(&self, path: &str) -> ApiResponse {
        self.request::<()>(Method::GET, path, None)
            .await
            .unwrap_or_else(ApiResponse::from)
    }

    /// `POST` with a JSON body, returning the uniform envelope.
    pub async fn post<B>(&self, path: &str, body: &B) -> ApiResponse
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body))
            .await
            .unwrap_or_else(ApiResponse::from)
    }

    /// `PUT` with a JSON body, returning the uniform envelope.
    pub async fn put<B>(&self, path: &str, body: &B) -> ApiResponse
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body))
            .await
            .unwrap_or_else(ApiResponse::from)
    }

    /// `DELETE` returning the uniform envelope.
    pub async fn delete(&self, path: &str) -> ApiResponse {
        self.request::<()>(Method::DELETE, path, None)
            .await
            .unwrap_or_else(ApiResponse::from)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    use super::*;
    use crate::InMemoryCredentialStore;

    fn test_client(server: &MockServer) -> Client {
        Client::new(Some(ClientSettings {
            api_url: server.uri(),
            ..ClientSettings::default()
        }))
    }

    #[tokio::test]
    async fn persisted_credential_is_attached_to_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers"))
            .and(header("Authorization", "Bearer persisted-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(InMemoryCredentialStore::default());
        store.store("persisted-token");
        let client = Client::new_with_credential_store(
            Some(ClientSettings {
                api_url: server.uri(),
                ..ClientSettings::default()
            }),
            store,
        );

        let envelope = client.get("/customers").await;
        assert!(envelope.success);
    }

    #[tokio::test]
    async fn unauthorized_response_forces_the_unauthenticated_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.internal.set_credential("stale-token".to_owned());

        let envelope = client.get("/products").await;

        assert!(!envelope.success);
        assert_eq!(
            envelope.message.as_deref(),
            Some("Your session has expired. Sign in again.")
        );
        assert_eq!(client.internal.credential(), None);
        assert_eq!(client.internal.session_state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn network_failure_folds_into_a_generic_envelope() {
        let client = Client::new(Some(ClientSettings {
            // Nothing listens on port 9.
            api_url: "http://127.0.0.1:9".to_owned(),
            ..ClientSettings::default()
        }));

        let envelope = client
            .post("/quotes", &serde_json::json!({"total": 100}))
            .await;

        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Request failed. Try again."));
    }

    #[tokio::test]
    async fn server_reported_failure_is_surfaced_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({"success": false, "error": "quote already invoiced"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let envelope = client.delete("/quotes/42").await;

        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("quote already invoiced"));
    }
}
