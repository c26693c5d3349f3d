use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base address of the hosted Trilho API.
pub const DEFAULT_API_URL: &str = "https://api.trilho.app/v1";

/// Basic client behavior settings. These specify the target and identification
/// of the Trilho client. They are optional and uneditable once the client is
/// initialized.
///
/// Defaults to
///
/// ```
/// # use trilho_core::ClientSettings;
/// let settings = ClientSettings {
///     api_url: "https://api.trilho.app/v1".to_string(),
///     user_agent: "Trilho Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url of the targeted Trilho API. Defaults to `https://api.trilho.app/v1`
    pub api_url: String,
    /// The user_agent sent to the Trilho API. Defaults to `Trilho Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            user_agent: "Trilho Rust-SDK".into(),
        }
    }
}

impl ClientSettings {
    /// Resolves settings from the environment: a non-empty `TRILHO_API_URL`
    /// overrides the hosted default.
    pub fn from_env() -> Self {
        let api_url = std::env::var("TRILHO_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Self {
            api_url,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins_over_the_hosted_default() {
        std::env::set_var("TRILHO_API_URL", "http://localhost:8787/v1");
        let settings = ClientSettings::from_env();
        assert_eq!(settings.api_url, "http://localhost:8787/v1");

        std::env::remove_var("TRILHO_API_URL");
        let settings = ClientSettings::from_env();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }
}
