use async_trait::async_trait;

use crate::OutboundMessage;

/// Outbound mail capability
///
/// Built once at startup and shared read-only between requests. A failed
/// send is reported as an error; the caller decides what the user sees.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()>;
}

