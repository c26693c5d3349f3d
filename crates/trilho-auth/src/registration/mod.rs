//! Two-step account registration: draft collection, input masks, validation
//! and submission.

mod masks;
mod wizard;

pub use masks::{digits, format_document, format_phone};
pub use wizard::{RegistrationDraft, RegistrationWizard, Step};

use tracing::warn;
use trilho_core::Client;

use crate::{
    api,
    session::{LoginOutcome, SessionClient},
};

/// Generic message when account creation fails without a server message.
const REGISTER_FAILED: &str = "Could not create the account. Try again.";

/// Options for the registration workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationOptions {
    /// Sign the new account in right after a successful registration.
    ///
    /// Off by default: a freshly registered account normally lands on the
    /// login entry point instead of an established session.
    pub auto_sign_in: bool,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The account was created; the wizard is done and the caller proceeds to
    /// login (already performed when `auto_signed_in` is set).
    Completed {
        /// Whether the new account was signed in as part of the submission.
        auto_signed_in: bool,
    },
    /// Validation or the server rejected the submission. The wizard keeps the
    /// draft and its active error explains why.
    Rejected,
}

/// Client driving the registration workflow.
#[derive(Clone)]
pub struct RegistrationClient {
    pub(crate) client: Client,
    options: RegistrationOptions,
}

impl RegistrationClient {
    pub(crate) fn new(client: Client, options: RegistrationOptions) -> Self {
        Self { client, options }
    }

    /// Validates the account step and submits the draft.
    ///
    /// Nothing is sent while a field is invalid. On transport failure the
    /// wizard stays on the account step with the draft intact, so the user can
    /// retry without re-entering data.
    pub async fn submit(&self, wizard: &mut RegistrationWizard) -> SubmitOutcome {
        if !wizard.validate_for_submit() {
            return SubmitOutcome::Rejected;
        }

        let request = wizard.to_register_request();
        let envelope = api::auth_register_post(&self.client, &request).await;
        if !envelope.success {
            let message = envelope.error_message().unwrap_or(REGISTER_FAILED).to_owned();
            wizard.set_error(message);
            return SubmitOutcome::Rejected;
        }

        let auto_signed_in = if self.options.auto_sign_in {
            let session = SessionClient::new(self.client.clone());
            match session.login(&request.user_email, &request.user_password).await {
                LoginOutcome::Authenticated { .. } => true,
                LoginOutcome::Rejected { message } => {
                    warn!("auto sign-in after registration failed: {message}");
                    false
                }
            }
        } else {
            false
        };

        SubmitOutcome::Completed { auto_signed_in }
    }
}
