pub const MISSING_FIELDS: &str = "All fields are required";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";
pub const DISPATCH_FAILED: &str = "Failed to send message. Please try again later.";
pub const SENT: &str = "Message sent successfully!";

/// Client-correctable input problems. The display text is returned to the
/// caller verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] ValidationError),

    /// The cause stays server-side; only the generic text is displayed.
    #[error("Failed to send message. Please try again later.")]
    Dispatch(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Self::Dispatch(value)
    }
}
