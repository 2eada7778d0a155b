use portfolio_shared::{Error, contact::ContactSubmission};

use crate::OutboundMessage;

impl super::Command {
    /// Validates the submission, then sends the operator notification and the
    /// auto-reply in that order.
    ///
    /// Sending is best-effort: a failed auto-reply does not undo an already
    /// delivered notification, and nothing is retried.
    #[tracing::instrument(name = "submit_contact", skip_all, fields(subject = %input.subject))]
    pub async fn submit_contact(&self, input: ContactSubmission) -> portfolio_shared::Result<()> {
        if let Err(err) = input.validate() {
            tracing::debug!(error = %err, "Contact submission rejected");
            return Err(err.into());
        }

        let notification = OutboundMessage::notification(&input, &self.config)?;
        let auto_reply = OutboundMessage::auto_reply(&input, &self.config)?;

        self.dispatch(&notification).await?;
        self.dispatch(&auto_reply).await?;

        tracing::info!("Contact submission dispatched");

        Ok(())
    }

    async fn dispatch(&self, message: &OutboundMessage) -> portfolio_shared::Result<()> {
        let timeout = self.config.send_timeout;

        match tokio::time::timeout(timeout, self.mailer.send(message)).await {
            Ok(Ok(())) => {
                tracing::info!(to = %message.to, subject = %message.subject, "Email sent");
                Ok(())
            }
            Ok(Err(err)) => {
                tracing::error!(error = ?err, to = %message.to, "Failed to send email");
                Err(Error::Dispatch(err))
            }
            Err(_) => {
                tracing::error!(?timeout, to = %message.to, "Email send timed out");
                Err(Error::Dispatch(anyhow::anyhow!(
                    "send timed out after {timeout:?}"
                )))
            }
        }
    }
}
