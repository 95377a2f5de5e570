// src/api/http/router.rs
// HTTP router composition for the three REST endpoints plus the static
// frontend fallback.

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::{
    chat::chat_handler,
    handlers::{health_handler, list_personas_handler},
};
use crate::config::CONFIG;
use crate::state::AppState;

pub fn router(app_state: Arc<AppState>) -> Router {
    let allow_origin = if CONFIG.cors_origin == "*" {
        AllowOrigin::any()
    } else {
        CONFIG
            .cors_origin
            .parse::<HeaderValue>()
            .map(AllowOrigin::exact)
            .unwrap_or_else(|_| AllowOrigin::any())
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Personas (public projection only)
        .route("/personas", get(list_personas_handler))

        // Health
        .route("/health", get(health_handler))

        // Chat
        .route("/chat", post(chat_handler))

        // Landing page + chat widget
        .fallback_service(ServeDir::new(&CONFIG.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
