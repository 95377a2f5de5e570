// src/api/http/handlers.rs
// Read-only endpoints: persona listing and liveness.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::persona::PersonaSummary;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub personas: usize,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Persona chat backend is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        personas: state.registry.len(),
    })
}

pub async fn list_personas_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<PersonaSummary>> {
    Json(state.registry.list())
}
