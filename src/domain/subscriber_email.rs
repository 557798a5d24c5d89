//! src/domain/subscriber_email.rs
use validator::validate_email;

#[derive(thiserror::Error, Debug)]
pub enum EmailError {
    #[error("Empty email")]
    Empty,
    #[error("Invalid email: {0}")]
    Invalid(String),
}

/// An address that passes the same checks as a `required` `type="email"`
/// input control. Surrounding whitespace is stripped first, as the control
/// does before submitting.
#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: String) -> Result<Self, EmailError> {
        let s = s.trim().to_string();
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(EmailError::Invalid(s))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
