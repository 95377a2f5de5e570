// src/api/http/chat.rs

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::error::ApiError;
use crate::llm::{ChatMessage, CompletionError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub persona: Option<String>,
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub persona: String,
    pub timestamp: String,
}

pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    // Absent and empty are the same thing to callers
    let message = request.message.as_deref().unwrap_or("");
    let persona = request.persona.as_deref().unwrap_or("");
    if message.is_empty() || persona.is_empty() {
        return Err(ApiError::bad_request("Message and persona are required"));
    }

    info!(
        "chat request: persona={} history_len={}",
        persona,
        request.conversation_history.len()
    );

    match state
        .completion
        .generate_response(&state.registry, message, persona, &request.conversation_history)
        .await
    {
        Ok(response) => Ok(Json(ChatResponse {
            response,
            persona: persona.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })),
        Err(CompletionError::PersonaNotFound(id)) => {
            Err(ApiError::not_found(format!("Persona '{}' not found", id)))
        }
        Err(err) => {
            // The decoded failure kind stays in the logs; callers get an
            // opaque 500 so provider and billing details never leak.
            error!(error = ?err, "chat completion failed");
            Err(ApiError::internal("Internal server error"))
        }
    }
}
