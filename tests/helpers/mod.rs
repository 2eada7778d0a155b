use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use portfolio::{AppState, Config};
use portfolio_contact::{Mailer, OutboundMessage};
use tower::ServiceExt;

/// Records sent messages; every send fails when `fail` is set.
#[derive(Clone, Default)]
pub struct TestMailer {
    pub sent: Arc<Mutex<Vec<OutboundMessage>>>,
    pub fail: bool,
}

impl TestMailer {
    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for TestMailer {
    async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("535 5.7.8 Authentication credentials invalid");
        }

        self.sent.lock().unwrap().push(message.clone());

        Ok(())
    }
}

pub fn setup_router(mailer: TestMailer) -> anyhow::Result<Router> {
    setup_router_with_origins(mailer, &[])
}

pub fn setup_router_with_origins(mailer: TestMailer, origins: &[&str]) -> anyhow::Result<Router> {
    let mut config = Config::load(None)?;
    config.server.allowed_origins = origins.iter().map(|origin| origin.to_string()).collect();
    let contact_command = portfolio_contact::Command::new(mailer, config.contact());

    Ok(portfolio::router(AppState {
        config,
        contact_command,
    }))
}

pub async fn post_json(router: &Router, body: impl Into<Body>) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())?;

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}
