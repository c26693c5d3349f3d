//! Request senders and wire models for the auth endpoints.

pub(crate) mod request;
pub(crate) mod response;

use trilho_api::ApiResponse;
use trilho_core::Client;

use self::request::{LoginRequest, RegisterRequest};

pub(crate) async fn auth_login_post(client: &Client, request: &LoginRequest) -> ApiResponse {
    client.post("/auth/login", request).await
}

pub(crate) async fn auth_admin_login_post(client: &Client, request: &LoginRequest) -> ApiResponse {
    client.post("/auth/admin/login", request).await
}

pub(crate) async fn auth_register_post(client: &Client, request: &RegisterRequest) -> ApiResponse {
    client.post("/auth/register", request).await
}

pub(crate) async fn auth_me_get(client: &Client) -> ApiResponse {
    client.get("/auth/me").await
}
