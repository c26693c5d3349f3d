//! Two-step registration state machine.

use super::masks::{digits, format_document, format_phone, is_valid_email};
use crate::api::request::RegisterRequest;

/// Wizard steps, in order. Transitions are forward/backward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Organization data.
    Company,
    /// Personal account data.
    Account,
}

/// Transient field values collected by the wizard.
///
/// `company_document` and `company_phone` hold the masked display strings; the
/// submission payload strips the masks. The draft lives only as long as the
/// wizard and is discarded on successful submission or on navigation away.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub company_name: String,
    pub company_document: String,
    pub company_phone: String,
    pub user_name: String,
    pub user_email: String,
    pub user_password: String,
    pub user_password_confirm: String,
    pub accept_terms: bool,
}

/// The registration wizard: collects a draft across two ordered steps,
/// applying input masks as values arrive.
///
/// Validation runs only at step-advance and at submission; the first unmet
/// condition, in field order, becomes the single active error and replaces
/// any previous one.
#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    step: Step,
    draft: RegistrationDraft,
    error: Option<String>,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    /// Starts a fresh wizard on the organization step.
    pub fn new() -> Self {
        Self {
            step: Step::Company,
            draft: RegistrationDraft::default(),
            error: None,
        }
    }

    /// Current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Field values as currently displayed.
    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// The single active error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets the organization name as typed.
    pub fn set_company_name(&mut self, value: &str) {
        self.draft.company_name = value.to_owned();
    }

    /// Sets the organization tax document, reapplying the display mask from
    /// the raw digit buffer.
    pub fn set_company_document(&mut self, value: &str) {
        self.draft.company_document = format_document(value);
    }

    /// Sets the organization phone, reapplying the display mask from the raw
    /// digit buffer.
    pub fn set_company_phone(&mut self, value: &str) {
        self.draft.company_phone = format_phone(value);
    }

    /// Sets the personal name as typed.
    pub fn set_user_name(&mut self, value: &str) {
        self.draft.user_name = value.to_owned();
    }

    /// Sets the account email as typed.
    pub fn set_user_email(&mut self, value: &str) {
        self.draft.user_email = value.to_owned();
    }

    /// Sets the account password as typed.
    pub fn set_user_password(&mut self, value: &str) {
        self.draft.user_password = value.to_owned();
    }

    /// Sets the password confirmation as typed.
    pub fn set_user_password_confirm(&mut self, value: &str) {
        self.draft.user_password_confirm = value.to_owned();
    }

    /// Records whether the terms of use were accepted.
    pub fn set_accept_terms(&mut self, accepted: bool) {
        self.draft.accept_terms = accepted;
    }

    /// Advances to the account step when the organization fields validate.
    /// Returns whether the step changed; on failure the first unmet condition
    /// becomes the active error.
    pub fn advance(&mut self) -> bool {
        self.error = None;
        match validate_company_step(&self.draft) {
            Ok(()) => {
                self.step = Step::Account;
                true
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                false
            }
        }
    }

    /// Returns to the organization step. Field values are kept.
    pub fn back(&mut self) {
        self.step = Step::Company;
    }

    /// Validates the account step ahead of submission. On failure the first
    /// unmet condition becomes the active error.
    pub(crate) fn validate_for_submit(&mut self) -> bool {
        self.error = None;
        match validate_account_step(&self.draft) {
            Ok(()) => true,
            Err(message) => {
                self.error = Some(message.to_owned());
                false
            }
        }
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Builds the submission payload: unformatted digit strings, with the
    /// document and phone omitted entirely when empty.
    pub(crate) fn to_register_request(&self) -> RegisterRequest {
        let document = digits(&self.draft.company_document);
        let phone = digits(&self.draft.company_phone);
        RegisterRequest {
            user_name: self.draft.user_name.clone(),
            user_email: self.draft.user_email.clone(),
            user_password: self.draft.user_password.clone(),
            company_name: self.draft.company_name.clone(),
            company_document: (!document.is_empty()).then_some(document),
            company_phone: (!phone.is_empty()).then_some(phone),
        }
    }
}

fn validate_company_step(draft: &RegistrationDraft) -> Result<(), &'static str> {
    let name = draft.company_name.trim();
    if name.is_empty() {
        return Err("Company name is required");
    }
    if name.chars().count() < 3 {
        return Err("Company name must be at least 3 characters");
    }
    let document = digits(&draft.company_document);
    if document.is_empty() {
        return Err("Company tax ID is required");
    }
    if document.len() != 14 {
        return Err("Company tax ID must have 14 digits");
    }
    let phone = digits(&draft.company_phone);
    if phone.is_empty() {
        return Err("Company phone is required");
    }
    if phone.len() < 10 {
        return Err("Company phone is invalid");
    }
    Ok(())
}

fn validate_account_step(draft: &RegistrationDraft) -> Result<(), &'static str> {
    if draft.user_name.trim().is_empty() {
        return Err("Your name is required");
    }
    if draft.user_email.trim().is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(&draft.user_email) {
        return Err("Email is invalid");
    }
    if draft.user_password.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if draft.user_password != draft.user_password_confirm {
        return Err("Passwords do not match");
    }
    if !draft.accept_terms {
        return Err("You must accept the terms of use");
    }
    Ok(())
}
