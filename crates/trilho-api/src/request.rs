//! Shared request plumbing for Trilho API calls.

use reqwest::{Method, StatusCode, header};
use serde::Serialize;

use crate::{
    configuration::Configuration,
    envelope::{ApiResponse, GENERIC_FAILURE},
    error::ApiError,
};

/// Sends a JSON request against the configured base address and normalizes the
/// response into an [`ApiResponse`] envelope.
///
/// A `401` is surfaced as [`ApiError::Unauthorized`] so the caller can run its
/// session teardown; any other non-success status carries the server-provided
/// message when one is present.
pub async fn send_api_request<B>(
    configuration: &Configuration,
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<ApiResponse, ApiError>
where
    B: Serialize + ?Sized,
{
    let url = format!("{}{}", configuration.base_path, path);
    let mut request = configuration
        .client
        .request(method, url)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json");
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    if !status.is_success() {
        let content = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiResponse>(&content)
            .ok()
            .and_then(|envelope| envelope.error_message().map(str::to_owned))
            .unwrap_or_else(|| GENERIC_FAILURE.to_owned());
        return Err(ApiError::Response { status, message });
    }

    Ok(response.json::<ApiResponse>().await?)
}
