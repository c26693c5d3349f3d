//! Configuration types for API clients.

/// Configuration for the Trilho API transport.
///
/// Holds the base address resolved once at client construction and the HTTP
/// client (with middleware) used for every request.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL path for the API (e.g. "<https://api.trilho.app/v1>").
    pub base_path: String,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
}
