// src/llm/openai.rs
// OpenAI-compatible chat-completions adapter. One fresh round trip per
// call: no retry, no backoff, no response caching.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use super::{ChatMessage, CompletionError, build_completion_messages};
use crate::config::Config;
use crate::persona::PersonaRegistry;

// Fixed generation configuration, matching the product tuning.
const MAX_TOKENS: usize = 1000;
const TEMPERATURE: f64 = 0.7;
const PRESENCE_PENALTY: f64 = 0.1;
const FREQUENCY_PENALTY: f64 = 0.1;

pub struct CompletionClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    history_cap: usize,
}

impl CompletionClient {
    pub fn new(
        api_key: String,
        endpoint: String,
        model: String,
        timeout_secs: u64,
        history_cap: usize,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, api_key, endpoint, model, history_cap })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.openai_api_key.clone(),
            config.chat_completions_url(),
            config.model.clone(),
            config.openai_timeout,
            config.history_message_cap,
        )
    }

    /// Generate one persona-voiced completion for `message`, given the
    /// caller-supplied history. Returns the first candidate's text.
    pub async fn generate_response(
        &self,
        registry: &PersonaRegistry,
        message: &str,
        persona_id: &str,
        history: &[ChatMessage],
    ) -> Result<String, CompletionError> {
        let persona = registry
            .get(persona_id)
            .ok_or_else(|| CompletionError::PersonaNotFound(persona_id.to_string()))?;

        let messages =
            build_completion_messages(persona.system_prompt, history, message, self.history_cap);

        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
            "presence_penalty": PRESENCE_PENALTY,
            "frequency_penalty": FREQUENCY_PENALTY,
        });

        debug!(
            "completion request: persona={} model={} messages={}",
            persona_id,
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let payload = response.json::<Value>().await.unwrap_or_default();
            return Err(decode_provider_error(status, &payload));
        }

        let raw = response.json::<Value>().await?;
        let content = raw["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                CompletionError::Provider("no completion content in provider response".to_string())
            })?
            .to_string();

        Ok(content)
    }
}

/// Map a provider error payload onto the closed taxonomy. The provider
/// reports a machine-readable `error.code`; anything unrecognized is
/// passed through with its message.
fn decode_provider_error(status: StatusCode, payload: &Value) -> CompletionError {
    match payload["error"]["code"].as_str().unwrap_or("") {
        "insufficient_quota" => CompletionError::QuotaExceeded,
        "invalid_api_key" => CompletionError::InvalidCredential,
        "rate_limit_exceeded" => CompletionError::RateLimited,
        _ => {
            let message = payload["error"]["message"]
                .as_str()
                .unwrap_or("provider returned no error detail");
            CompletionError::Provider(format!("{}: {}", status, message))
        }
    }
}
