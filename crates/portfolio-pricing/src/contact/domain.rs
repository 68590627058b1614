use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::relay::RelayError;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const RETRY_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// Contact form fields, serialized as the relay's JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Trims every field and checks the form is complete and the address is
    /// plausible.
    pub fn validated(self) -> Result<Self, ContactError> {
        let submission = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if [
            &submission.name,
            &submission.email,
            &submission.subject,
            &submission.message,
        ]
        .iter()
        .any(|field| field.is_empty())
        {
            return Err(ContactError::MissingFields);
        }

        if !is_valid_email(&submission.email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(submission)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
        .is_match(email)
}

/// Acknowledgement returned once the relay accepts a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub message: &'static str,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ContactError {
    /// Text shown next to the form. Relay details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Relay(_) => RETRY_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
