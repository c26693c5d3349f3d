//! Error types for API operations.

/// An error returned by the API transport.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server no longer accepts the credential. Not recoverable in place;
    /// the session must be torn down and the user sent back through login.
    #[error("the session is no longer authorized")]
    Unauthorized,

    /// Server returned a non-success HTTP response.
    #[error("API error {status}: {message}")]
    Response {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Server-provided error message, or a generic fallback.
        message: String,
    },

    /// Could not reach the server (DNS failure, timeout, TLS error, connection refused, etc.)
    #[error("not connected: {0}")]
    NotConnected(String),

    /// Catch-all for other errors (serialization, IO, etc.)
    #[error("other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return ApiError::Unauthorized;
            }
            return ApiError::Response {
                status,
                message: e.to_string(),
            };
        }

        // Consider connection errors, timeouts, and errors sending requests as "not connected",
        // since they all indicate a failure to communicate with the server.
        if e.is_connect() || e.is_timeout() || e.is_request() {
            return ApiError::NotConnected(e.to_string());
        }

        ApiError::Other(e.to_string())
    }
}

impl From<reqwest_middleware::Error> for ApiError {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => ApiError::Other(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Other(e.to_string())
    }
}
