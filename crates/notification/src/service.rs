//! SMTP mail transport using lettre

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::{Mailer, OutboundMessage};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// Upgrade the connection with STARTTLS when authenticating
    pub smtp_tls: bool,
    pub timeout_secs: u64,
}

/// Email service sending contact messages over SMTP
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
}

impl EmailService {
    /// Create a new email service from configuration
    ///
    /// No connection is opened here; the pool connects on first send.
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let timeout = Some(Duration::from_secs(config.timeout_secs));

        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(timeout)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                tls = config.smtp_tls,
                "Email service initialized with authentication"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            let builder = if config.smtp_tls {
                SmtpTransport::starttls_relay(&config.smtp_host)?
            } else {
                SmtpTransport::builder_dangerous(&config.smtp_host)
            };

            builder
                .port(config.smtp_port)
                .credentials(creds)
                .timeout(timeout)
                .build()
        };

        Ok(Self { mailer })
    }
}

pub fn build_message(message: &OutboundMessage) -> anyhow::Result<Message> {
    let from = Mailbox::new(
        Some(message.from.name.to_owned()),
        message.from.address.parse()?,
    );

    let mut builder = Message::builder()
        .from(from)
        .to(message.to.parse()?)
        .subject(message.subject.to_owned())
        .header(header::ContentType::TEXT_HTML);

    // The operator copy still goes out when only the Reply-To is unusable
    if let Some(reply_to) = &message.reply_to {
        match reply_to.parse() {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(err) => {
                tracing::warn!(reply_to = %reply_to, error = %err, "Dropping unparseable Reply-To");
            }
        }
    }

    Ok(builder.body(message.html.to_owned())?)
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        tracing::info!(to = %message.to, subject = %message.subject, "Sending email");

        let email = build_message(message)?;
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send(&email)).await??;

        Ok(())
    }
}
