// src/llm/mod.rs
// Completion-client types shared across the provider adapter and the
// HTTP facade.

pub mod openai;

pub use openai::CompletionClient;

use serde::{Deserialize, Serialize};

/// One turn in a conversation, in the provider's wire format.
/// Incoming history is treated as an opaque ordered sequence; roles
/// are not validated beyond what the provider accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_string(), content: content.into() }
    }
}

/// Closed failure taxonomy for the completion boundary. Provider error
/// codes are decoded into these variants exactly once, at the adapter
/// edge. Nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("Persona '{0}' not found")]
    PersonaNotFound(String),

    #[error("Completion provider quota exceeded. Please check your billing.")]
    QuotaExceeded,

    #[error("Invalid completion provider API key. Please check your configuration.")]
    InvalidCredential,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("AI service error: {0}")]
    Provider(String),

    #[error("Failed to reach completion provider: {0}")]
    Network(#[from] reqwest::Error),
}

/// Assemble the message array for one completion round trip:
/// one system turn, at most the last `history_cap` history turns
/// (older turns are silently dropped), and exactly one new user turn.
pub fn build_completion_messages(
    system_prompt: &str,
    history: &[ChatMessage],
    message: &str,
    history_cap: usize,
) -> Vec<ChatMessage> {
    let recent_start = history.len().saturating_sub(history_cap);
    let mut messages = Vec::with_capacity(2 + history.len().min(history_cap));
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history[recent_start..].iter().cloned());
    messages.push(ChatMessage::user(message));
    messages
}
