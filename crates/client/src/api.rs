use portfolio_shared::contact::{ContactResponse, ContactSubmission};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),
}

/// How a submission request ended, from the form's point of view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx; carries the server's message when present
    Accepted(Option<String>),
    /// Non-2xx; carries the server's `error` when present
    Rejected(Option<String>),
    /// The request never produced a readable response
    Unreachable,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub async fn submit_contact(&self, input: &ContactSubmission) -> Outcome {
        let response = match self
            .client
            .post(format!("{}/api/contact", self.base_url))
            .json(input)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "Contact request failed");
                return Outcome::Unreachable;
            }
        };

        let ok = response.status().is_success();

        let body: ContactResponse = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "Contact response is not readable");
                return Outcome::Unreachable;
            }
        };

        if ok {
            Outcome::Accepted(body.message)
        } else {
            Outcome::Rejected(body.error)
        }
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
