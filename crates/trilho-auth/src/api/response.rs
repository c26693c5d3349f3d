use serde::Deserialize;
use trilho_core::{AccountType, Identity, MissingFieldError, Tenant, require};
use uuid::Uuid;

/// Payload carried by a successful login response.
#[allow(missing_docs)]
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginPayload {
    pub token: Option<String>,
    pub uuid: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub tenant_id: Option<Uuid>,
    pub tenant: Option<TenantPayload>,
    pub modules: Option<Vec<String>>,
}

/// Tenant object embedded in login payloads.
#[allow(missing_docs)]
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TenantPayload {
    pub uuid: Option<Uuid>,
    pub name: Option<String>,
    pub status: Option<String>,
}

/// Claims returned by `GET /auth/me`, decoded server-side from the active
/// credential. `is_platform_admin` keeps its snake_case spelling on the wire.
#[allow(missing_docs)]
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MeClaims {
    pub sub: Option<Uuid>,
    pub uuid: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    #[serde(rename = "is_platform_admin")]
    pub is_platform_admin: Option<bool>,
    pub tenant_id: Option<Uuid>,
    pub tenant_name: Option<String>,
    pub modules: Option<Vec<String>>,
}

impl LoginPayload {
    /// Builds the identity for a regular login. The account class comes from
    /// the wire `type` field, defaulting to tenant.
    pub(crate) fn into_identity(self) -> Result<Identity, MissingFieldError> {
        let tenant = self.tenant.and_then(|tenant| {
            tenant.uuid.map(|id| Tenant {
                id,
                name: tenant.name.unwrap_or_default(),
                status: tenant.status.unwrap_or_else(|| "active".to_owned()),
            })
        });

        Ok(Identity {
            id: require!(self.uuid),
            name: require!(self.name),
            email: require!(self.email),
            role: require!(self.role),
            account_type: AccountType::from_wire(self.account_type.as_deref()),
            tenant,
            modules: self.modules,
        })
    }

    /// Builds the identity for an administrator login: the account class is
    /// forced to admin and no tenant reference is attached.
    pub(crate) fn into_admin_identity(self) -> Result<Identity, MissingFieldError> {
        Ok(Identity {
            id: require!(self.uuid),
            name: require!(self.name),
            email: require!(self.email),
            role: require!(self.role),
            account_type: AccountType::Admin,
            tenant: None,
            modules: None,
        })
    }
}

impl MeClaims {
    /// Builds the identity from decoded credential claims. The tenant status
    /// is not part of the claims and defaults to active.
    pub(crate) fn into_identity(self) -> Result<Identity, MissingFieldError> {
        let account_type = match self.account_type.as_deref() {
            Some(value) => AccountType::from_wire(Some(value)),
            None if self.is_platform_admin == Some(true) => AccountType::Admin,
            None => AccountType::Tenant,
        };

        let tenant = self.tenant_id.map(|id| Tenant {
            id,
            name: self.tenant_name.unwrap_or_default(),
            status: "active".to_owned(),
        });

        Ok(Identity {
            id: require!(self.sub.or(self.uuid)),
            name: require!(self.name),
            email: require!(self.email),
            role: require!(self.role),
            account_type,
            tenant,
            modules: self.modules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(value: serde_json::Value) -> MeClaims {
        serde_json::from_value(value).expect("valid claims")
    }

    #[test]
    fn claims_decode_requires_the_core_fields() {
        let incomplete = claims(serde_json::json!({
            "sub": "0193a1de-5d51-7b6e-8f0a-9be07f6b54a3",
            "email": "sem-nome@empresa.com.br"
        }));
        let error = incomplete.into_identity().expect_err("name is required");
        assert!(error.to_string().contains("name"));
    }

    #[test]
    fn platform_admin_flag_maps_to_the_admin_class() {
        let identity = claims(serde_json::json!({
            "sub": "0193a1de-5d51-7b6e-8f0a-9be07f6b54a3",
            "name": "Root",
            "email": "root@trilho.app",
            "role": "superuser",
            "is_platform_admin": true
        }))
        .into_identity()
        .expect("valid identity");

        assert_eq!(identity.account_type, AccountType::Admin);
        assert_eq!(identity.tenant, None);
    }

    #[test]
    fn tenant_claims_carry_the_tenant_reference_with_active_status() {
        let identity = claims(serde_json::json!({
            "sub": "0193a1de-5d51-7b6e-8f0a-9be07f6b54a3",
            "name": "Ana",
            "email": "ana@empresa.com.br",
            "role": "owner",
            "type": "tenant",
            "tenantId": "3f44c78e-2f88-4f09-a4c7-c6fd7b5a3c66",
            "tenantName": "Lima Acabamentos",
            "modules": ["comercial", "financeiro"]
        }))
        .into_identity()
        .expect("valid identity");

        let tenant = identity.tenant.expect("tenant reference");
        assert_eq!(tenant.name, "Lima Acabamentos");
        assert_eq!(tenant.status, "active");
        assert_eq!(identity.modules.as_deref(), Some(&["comercial".to_owned(), "financeiro".to_owned()][..]));
    }

    #[test]
    fn admin_login_payload_ignores_tenant_data() {
        let payload: LoginPayload = serde_json::from_value(serde_json::json!({
            "token": "jwt",
            "uuid": "0193a1de-5d51-7b6e-8f0a-9be07f6b54a3",
            "name": "Root",
            "email": "root@trilho.app",
            "role": "superuser",
            "tenantId": "3f44c78e-2f88-4f09-a4c7-c6fd7b5a3c66"
        }))
        .expect("valid payload");

        let identity = payload.into_admin_identity().expect("valid identity");
        assert_eq!(identity.account_type, AccountType::Admin);
        assert_eq!(identity.tenant, None);
    }
}
