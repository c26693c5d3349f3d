use super::credential::CredentialSlot;

/// Attaches the active bearer credential to outgoing requests. Requests made
/// while no credential is present go out without an authorization header.
pub(crate) struct BearerAuthMiddleware {
    pub(crate) credential: CredentialSlot,
}

#[async_trait::async_trait]
impl reqwest_middleware::Middleware for BearerAuthMiddleware {
    async fn handle(
        &self,
        mut req: reqwest::Request,
        ext: &mut http::Extensions,
        next: reqwest_middleware::Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        if let Some(token) = self.credential.get() {
            match format!("Bearer {}", token).parse() {
                Ok(header_value) => {
                    req.headers_mut()
                        .insert(http::header::AUTHORIZATION, header_value);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse credential for header: {e}");
                }
            }
        }

        next.run(req, ext).await
    }
}
