use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: portfolio_contact::Command,
}

pub fn router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.server.allowed_origins);

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .with_state(app_state)
        .layer(cors)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(origin = %origin, error = %err, "Ignoring invalid allowed origin");
                None
            }
        })
        .collect::<Vec<_>>();

    layer.allow_origin(origins)
}
