//! The uniform response envelope for Trilho API operations.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Generic message used when a failure carries no server-provided text.
pub(crate) const GENERIC_FAILURE: &str = "Request failed. Try again.";

/// Uniform result of every Trilho API call.
///
/// Every endpoint responds with `{success, data?, message?, error?}`. The
/// transport folds its own failures (network, decode, non-success statuses)
/// into the same shape, so UI callers never see a raw error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Operation-dependent payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable message, usually present on failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error description set by some endpoints instead of `message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Builds a failure envelope carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// The error description reported by the server, preferring the `error`
    /// field over `message`.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

impl From<ApiError> for ApiResponse {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unauthorized => Self::failure("Your session has expired. Sign in again."),
            ApiError::Response { message, .. } => Self::failure(message),
            ApiError::NotConnected(_) | ApiError::Other(_) => Self::failure(GENERIC_FAILURE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_the_error_field() {
        let envelope: ApiResponse =
            serde_json::from_str(r#"{"success":false,"error":"tax ID already registered","message":"conflict"}"#)
                .expect("valid envelope");
        assert_eq!(envelope.error_message(), Some("tax ID already registered"));
    }

    #[test]
    fn missing_fields_default() {
        let envelope: ApiResponse = serde_json::from_str(r#"{"success":true}"#).expect("valid envelope");
        assert!(envelope.success);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.error_message(), None);
    }

    #[test]
    fn transport_errors_fold_into_failure_envelopes() {
        let envelope = ApiResponse::from(ApiError::NotConnected("dns".into()));
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some(GENERIC_FAILURE));

        let envelope = ApiResponse::from(ApiError::Unauthorized);
        assert!(!envelope.success);
        assert_eq!(
            envelope.message.as_deref(),
            Some("Your session has expired. Sign in again.")
        );
    }
}
