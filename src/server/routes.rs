// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    compose_handler, generate_handler, get_settings_handler, health_handler, metrics_handler,
    put_settings_handler,
};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::generator::{PostGenerator, Session};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub generator: Arc<PostGenerator>,
    pub session: Arc<Session>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let generator = PostGenerator::new(&config)?;
        let session = Session::new(config.initial_settings());

        Ok(Self {
            config,
            generator: Arc::new(generator),
            session: Arc::new(session),
        })
    }
}

pub fn create_router(config: AppConfig) -> Result<Router> {
    Ok(router(AppState::new(config)?))
}

/// Build the router around existing state
pub fn router(state: AppState) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/v1/settings", get(get_settings_handler).put(put_settings_handler))
        .route("/v1/compose", post(compose_handler))
        .route("/v1/generate", post(generate_handler))
        // Attachments travel as base64: 20MB decoded is ~27MB encoded, plus room for several
        .layer(axum::extract::DefaultBodyLimit::disable())
        .layer(tower_http::limit::RequestBodyLimitLayer::new(64 * 1024 * 1024))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
