use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated principal.
///
/// Held exclusively by the session state and replaced wholesale on every
/// login, logout and refresh; never mutated field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role label as reported by the server.
    pub role: String,
    /// Account class.
    pub account_type: AccountType,
    /// Tenant the account belongs to. Expected for tenant accounts, but may be
    /// absent transiently while a partial profile loads.
    pub tenant: Option<Tenant>,
    /// Module names enabled for the account, when reported.
    pub modules: Option<Vec<String>>,
}

/// Account class of an [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Platform administrator; carries no tenant reference.
    Admin,
    /// Regular tenant account.
    Tenant,
}

impl AccountType {
    /// Resolves the wire `type` field. Anything other than `admin`, including
    /// a missing field, is a tenant account.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("admin") => Self::Admin,
            _ => Self::Tenant,
        }
    }
}

/// Tenant reference attached to tenant accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    /// Tenant identifier.
    pub id: Uuid,
    /// Tenant display name.
    pub name: String,
    /// Tenant status label.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_defaults_to_tenant() {
        assert_eq!(AccountType::from_wire(Some("admin")), AccountType::Admin);
        assert_eq!(AccountType::from_wire(Some("tenant")), AccountType::Tenant);
        assert_eq!(AccountType::from_wire(Some("owner")), AccountType::Tenant);
        assert_eq!(AccountType::from_wire(None), AccountType::Tenant);
    }
}
