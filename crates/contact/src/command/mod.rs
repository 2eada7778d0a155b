use std::{sync::Arc, time::Duration};

use crate::Mailer;

mod submit_contact;

/// Addresses and profile details the two contact emails are built from
#[derive(Clone, Debug)]
pub struct ContactConfig {
    /// Operator inbox receiving notifications
    pub recipient_address: String,
    /// Envelope sender of both emails
    pub sender_address: String,
    pub owner_name: String,
    pub github_url: String,
    pub linkedin_url: String,
    /// Upper bound for a single transport send
    pub send_timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient_address: "alex.chen@example.com".to_owned(),
            sender_address: "noreply@portfolio.com".to_owned(),
            owner_name: "Alex Chen".to_owned(),
            github_url: "https://github.com/alexchen".to_owned(),
            linkedin_url: "https://linkedin.com/in/alexchen".to_owned(),
            send_timeout: Duration::from_secs(15),
        }
    }
}

/// Stateless contact service; clones share the same mailer.
#[derive(Clone)]
pub struct Command {
    mailer: Arc<dyn Mailer>,
    config: Arc<ContactConfig>,
}

impl Command {
    pub fn new(mailer: impl Mailer + 'static, config: ContactConfig) -> Self {
        Self {
            mailer: Arc::new(mailer),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }
}
