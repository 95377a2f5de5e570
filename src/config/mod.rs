// src/config/mod.rs
// All tunables load from the environment (with .env support); nothing
// outside this module reads env vars directly.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    // ── Completion Provider Configuration
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub openai_timeout: u64,

    // ── Conversation Configuration
    pub history_message_cap: usize,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub app_env: String,
    pub static_dir: String,

    // ── CORS Settings
    pub cors_origin: String,

    // ── Logging Configuration
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Tolerate trailing comments and whitespace in .env values
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        let _ = dotenvy::dotenv();

        Self {
            openai_api_key: env_var_or("OPENAI_API_KEY", String::new()),
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com".to_string()),
            model: env_var_or("OPENAI_MODEL", "gpt-4o-mini".to_string()),
            openai_timeout: env_var_or("OPENAI_TIMEOUT", 60),
            history_message_cap: env_var_or("HISTORY_MESSAGE_CAP", 20),
            host: env_var_or("HOST", "0.0.0.0".to_string()),
            port: env_var_or("PORT", 3000),
            app_env: env_var_or("APP_ENV", "development".to_string()),
            static_dir: env_var_or("STATIC_DIR", "static".to_string()),
            cors_origin: env_var_or("CORS_ORIGIN", "*".to_string()),
            log_level: env_var_or("LOG_LEVEL", "info".to_string()),
        }
    }

    // --- Convenience Methods ---

    /// Whether a provider credential is configured at all.
    /// Validity is only known once the provider rejects or accepts it.
    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }

    /// Production mode keeps the process alive on a missing credential
    /// (serverless cold starts); development mode treats it as fatal.
    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Full URL of the provider's chat-completions endpoint
    pub fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.openai_base_url.trim_end_matches('/'))
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
