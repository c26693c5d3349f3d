use trilho_core::{AccountType, SessionState};
use uuid::Uuid;

/// Where the composition root should send the user, derived purely from the
/// session state. Navigation itself stays outside the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Platform administration home.
    AdminHome,
    /// Dashboard of the given tenant.
    TenantDashboard(Uuid),
    /// Login entry point.
    Login,
}

/// Derives the redirect target for a session state.
///
/// Returns `None` while the decision must stay deferred: during the startup
/// check, and for a tenant identity whose tenant reference has not finished
/// loading.
pub fn redirect_target(state: &SessionState) -> Option<RedirectTarget> {
    match state {
        SessionState::Loading => None,
        SessionState::Unauthenticated => Some(RedirectTarget::Login),
        SessionState::Authenticated(identity) => match identity.account_type {
            AccountType::Admin => Some(RedirectTarget::AdminHome),
            AccountType::Tenant => identity
                .tenant
                .as_ref()
                .map(|tenant| RedirectTarget::TenantDashboard(tenant.id)),
        },
    }
}

#[cfg(test)]
mod tests {
    use trilho_core::{Identity, Tenant};
    use uuid::Uuid;

    use super::*;

    fn tenant_identity(tenant: Option<Tenant>) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            name: "Ana Lima".to_owned(),
            email: "ana@empresa.com.br".to_owned(),
            role: "owner".to_owned(),
            account_type: AccountType::Tenant,
            tenant,
            modules: None,
        }
    }

    #[test]
    fn loading_defers_the_decision() {
        assert_eq!(redirect_target(&SessionState::Loading), None);
    }

    #[test]
    fn unauthenticated_goes_to_login() {
        assert_eq!(
            redirect_target(&SessionState::Unauthenticated),
            Some(RedirectTarget::Login)
        );
    }

    #[test]
    fn admin_goes_to_the_admin_home() {
        let mut identity = tenant_identity(None);
        identity.account_type = AccountType::Admin;
        assert_eq!(
            redirect_target(&SessionState::Authenticated(identity)),
            Some(RedirectTarget::AdminHome)
        );
    }

    #[test]
    fn tenant_goes_to_its_dashboard_once_the_tenant_reference_is_loaded() {
        let tenant_id = Uuid::new_v4();
        let identity = tenant_identity(Some(Tenant {
            id: tenant_id,
            name: "Lima Acabamentos".to_owned(),
            status: "active".to_owned(),
        }));
        assert_eq!(
            redirect_target(&SessionState::Authenticated(identity)),
            Some(RedirectTarget::TenantDashboard(tenant_id))
        );

        // A partial profile keeps the decision deferred.
        assert_eq!(
            redirect_target(&SessionState::Authenticated(tenant_identity(None))),
            None
        );
    }
}
