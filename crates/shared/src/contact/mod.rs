use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{DISPATCH_FAILED, Error, SENT, ValidationError};

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Counted in UTF-16 code units, as browsers count form input.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Payload exchanged between the contact form and `POST /api/contact`.
///
/// Absent fields deserialize to the empty string so they fail validation the
/// same way an empty field does.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks run in a fixed order and the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if self.message.encode_utf16().count() < MIN_MESSAGE_LEN {
            return Err(ValidationError::MessageTooShort);
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Loose `local@domain.tld` shape check, not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { message: String },
    ValidationError { message: String },
    DispatchError { message: String },
}

impl SubmissionResult {
    pub fn success() -> Self {
        Self::Success {
            message: SENT.to_owned(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message }
            | Self::ValidationError { message }
            | Self::DispatchError { message } => message,
        }
    }

    /// Wire body: `{success, message}` on success, `{error}` otherwise.
    pub fn body(&self) -> ContactResponse {
        match self {
            Self::Success { message } => ContactResponse {
                success: Some(true),
                message: Some(message.to_owned()),
                error: None,
            },
            Self::ValidationError { message } | Self::DispatchError { message } => {
                ContactResponse {
                    success: None,
                    message: None,
                    error: Some(message.to_owned()),
                }
            }
        }
    }
}

impl From<ValidationError> for SubmissionResult {
    fn from(value: ValidationError) -> Self {
        Self::ValidationError {
            message: value.to_string(),
        }
    }
}

impl From<crate::Result<()>> for SubmissionResult {
    fn from(value: crate::Result<()>) -> Self {
        match value {
            Ok(()) => Self::success(),
            Err(Error::Validate(err)) => err.into(),
            Err(Error::Dispatch(_)) => Self::DispatchError {
                message: DISPATCH_FAILED.to_owned(),
            },
        }
    }
}

/// JSON body of every `/api/contact` response, read back by the client.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ContactResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
