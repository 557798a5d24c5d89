//! src/signup.rs
use crate::domain::{EmailError, SubscriberEmail};
use crate::hubspot::HubSpot;

pub const SUCCESS_MESSAGE: &str = "Thanks for signing up! 🎉 You’re one step closer to your next legendary night out. Keep an eye on your inbox—we’ll be in touch soon with some exciting details!";
pub const FAILURE_MESSAGE: &str = "Oops! There was a problem. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Success,
    Failure,
}

/// State behind the email capture form.
///
/// `submitting` is advisory: it drives the disabled state of the submit
/// button but does not stop two overlapping calls to [`SignupForm::submit`].
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    email: String,
    submitting: bool,
    result_message: Option<String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(email: String) -> Self {
        Self {
            email,
            ..Self::default()
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_disabled(&self) -> bool {
        self.submitting
    }

    pub fn result_message(&self) -> Option<&str> {
        self.result_message.as_deref()
    }

    /// Validates the current email and moves the form into the submitting
    /// state. Nothing changes if the email is rejected.
    pub fn begin(&mut self) -> Result<SubscriberEmail, EmailError> {
        let email = SubscriberEmail::parse(self.email.clone())?;

        self.result_message = None;
        self.submitting = true;

        Ok(email)
    }

    /// Applies the result of a submission and returns the form to idle.
    pub fn settle<E>(&mut self, result: Result<(), E>) -> SignupOutcome
    where
        E: std::error::Error,
    {
        let outcome = match result {
            Ok(()) => {
                self.email.clear();
                self.result_message = Some(SUCCESS_MESSAGE.into());
                SignupOutcome::Success
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Signup submission failed: {}", e);
                self.result_message = Some(FAILURE_MESSAGE.into());
                SignupOutcome::Failure
            }
        };

        self.submitting = false;
        outcome
    }

    #[tracing::instrument(name = "Submitting signup form", skip(self, hubspot), fields(email = %self.email))]
    pub async fn submit(&mut self, hubspot: &HubSpot) -> Result<SignupOutcome, EmailError> {
        let email = self.begin()?;
        let result = hubspot.submit_email(&email).await;

        Ok(self.settle(result))
    }
}
