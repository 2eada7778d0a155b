use portfolio_shared::contact::ContactSubmission;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{ApiClient, Outcome};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Form inputs, named as in the page markup
#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Contact form state machine
///
/// There is no local validation; the server decides and the form shows
/// whatever it answered.
#[derive(Clone, Debug)]
pub struct ContactForm {
    draft: ContactSubmission,
    state: FormState,
    fallback_email: String,
}

impl ContactForm {
    /// `fallback_email` is offered when the server cannot be reached.
    pub fn new(fallback_email: impl Into<String>) -> Self {
        Self {
            draft: ContactSubmission::default(),
            state: FormState::Idle,
            fallback_email: fallback_email.into(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &ContactSubmission {
        &self.draft
    }

    /// Submit affordance should be disabled while true.
    pub fn is_busy(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Updates one draft field. The displayed state is left as is.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Subject => self.draft.subject = value,
            Field::Message => self.draft.message = value,
        }
    }

    /// Enters `Submitting` and hands out the payload to send, or `None` when a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_busy() {
            return None;
        }

        self.state = FormState::Submitting;

        Some(self.draft.clone())
    }

    /// Applies the result of the in-flight submission. Ignored when nothing is
    /// in flight.
    pub fn complete(&mut self, outcome: Outcome) {
        if !self.is_busy() {
            tracing::debug!(?outcome, "Ignoring outcome with no submission in flight");
            return;
        }

        self.state = match outcome {
            Outcome::Accepted(_) => {
                self.draft.clear();
                FormState::Succeeded(SUCCESS_MESSAGE.to_owned())
            }
            Outcome::Rejected(error) => {
                FormState::Failed(
                    error
                        .filter(|error| !error.is_empty())
                        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
                )
            }
            Outcome::Unreachable => FormState::Failed(format!(
                "Failed to send message. Please email me directly at {}",
                self.fallback_email
            )),
        };
    }

    /// Runs one full submission against the API.
    pub async fn submit(&mut self, api: &ApiClient) -> &FormState {
        if let Some(payload) = self.begin_submit() {
            let outcome = api.submit_contact(&payload).await;
            self.complete(outcome);
        }

        &self.state
    }
}
