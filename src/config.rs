//! Configuration management for Callsight Server

use std::env;

use thiserror::Error;

/// Error raised when required configuration is missing or malformed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub analyst: AnalystConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the hosted completion API.
///
/// Injected into the provider at construction so no handler code reads the
/// environment directly.
#[derive(Debug, Clone)]
pub struct AnalystConfig {
    /// API credential, supplied out-of-band via GROQ_API_KEY
    pub api_key: String,
    /// Base URL of the OpenAI-compatible completions API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature (low, favouring determinism)
    pub temperature: f64,
    /// Output length bound
    pub max_tokens: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            analyst: AnalystConfig {
                api_key: env::var("GROQ_API_KEY")
                    .map_err(|_| ConfigError::MissingVar("GROQ_API_KEY"))?,
                base_url: env::var("GROQ_BASE_URL")
                    .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
                model: env::var("GROQ_MODEL")
                    .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
                temperature: 0.2,
                max_tokens: 2000,
            },
        })
    }
}
