use askama::Template;
use portfolio_shared::contact::ContactSubmission;

use crate::ContactConfig;

pub const NOTIFICATION_SUBJECT_PREFIX: &str = "Portfolio Contact: ";
pub const AUTO_REPLY_SUBJECT: &str = "Thanks for reaching out!";

/// One email, fully rendered and ready for the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: Sender,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    pub name: String,
    pub address: String,
}

#[derive(Template)]
#[template(path = "notification.html")]
struct NotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "auto-reply.html")]
struct AutoReplyTemplate<'a> {
    name: &'a str,
    owner_name: &'a str,
    github_url: &'a str,
    linkedin_url: &'a str,
}

impl OutboundMessage {
    /// Operator copy of the submission. Replies go straight to the submitter.
    pub fn notification(
        input: &ContactSubmission,
        config: &ContactConfig,
    ) -> anyhow::Result<Self> {
        let html = NotificationTemplate {
            name: &input.name,
            email: &input.email,
            subject: &input.subject,
            lines: input.message.split('\n').collect(),
        }
        .render()?;

        Ok(Self {
            from: Sender {
                name: input.name.to_owned(),
                address: config.sender_address.to_owned(),
            },
            to: config.recipient_address.to_owned(),
            reply_to: Some(input.email.to_owned()),
            subject: format!("{NOTIFICATION_SUBJECT_PREFIX}{}", input.subject),
            html,
        })
    }

    pub fn auto_reply(input: &ContactSubmission, config: &ContactConfig) -> anyhow::Result<Self> {
        let html = AutoReplyTemplate {
            name: &input.name,
            owner_name: &config.owner_name,
            github_url: &config.github_url,
            linkedin_url: &config.linkedin_url,
        }
        .render()?;

        Ok(Self {
            from: Sender {
                name: config.owner_name.to_owned(),
                address: config.sender_address.to_owned(),
            },
            to: input.email.to_owned(),
            reply_to: None,
            subject: AUTO_REPLY_SUBJECT.to_owned(),
            html,
        })
    }
}
