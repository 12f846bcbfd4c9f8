//! Axum-based HTTP server for social-architect.
//!
//! Exposes the post generator and the prompt composer as a small JSON API
//! for a browser front-end. One in-memory session holds the settings and
//! refuses a second generation while one is running.
//!
//! # Components
//!
//! - `handlers`: Endpoint implementations (health, settings, compose, generate, metrics).
//! - `middleware`: Request ID tracking.
//! - `routes`: Router configuration and shared state.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{ComposeRequest, ComposeResponse, HealthResponse};
pub use routes::{create_router, router, AppState};
