use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use portfolio_contact::{Command, ContactConfig, ContactSubmission, Mailer, OutboundMessage};

/// Records every message; fails the send with index `fail_at` (0-based) if set.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<OutboundMessage>>>,
    pub attempts: Arc<Mutex<usize>>,
    pub fail_at: Option<usize>,
}

impl RecordingMailer {
    #[allow(dead_code)]
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts - 1
        };

        if self.fail_at == Some(attempt) {
            anyhow::bail!("connection refused (os error 111)");
        }

        self.sent.lock().unwrap().push(message.clone());

        Ok(())
    }
}

/// Never finishes within any reasonable timeout.
#[allow(dead_code)]
pub struct StalledMailer;

#[async_trait]
impl Mailer for StalledMailer {
    async fn send(&self, _message: &OutboundMessage) -> anyhow::Result<()> {
        tokio::time::sleep(Duration::from_secs(60)).await;

        Ok(())
    }
}

pub fn command(mailer: impl Mailer + 'static) -> Command {
    Command::new(mailer, ContactConfig::default())
}

pub fn submission(name: &str, email: &str, subject: &str, message: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    }
}

#[allow(dead_code)]
pub fn ada() -> ContactSubmission {
    submission("Ada", "ada@example.com", "Hi", "Loved your portfolio!")
}
