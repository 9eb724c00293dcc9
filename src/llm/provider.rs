//! Completion providers
//!
//! Defines the provider trait and the Groq-backed implementation.

use async_trait::async_trait;

use crate::config::AnalystConfig;

use super::types::CompletionError;

/// Chat-completion provider trait
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one system+user completion and return the message content.
    ///
    /// The provider requests forced-JSON output; callers still parse and
    /// validate the content themselves.
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

/// Groq chat-completions provider (OpenAI-compatible wire format)
pub struct GroqProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl GroqProvider {
    pub fn new(config: &AnalystConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Build the completions request body.
    ///
    /// `response_format: json_object` forces syntactically valid JSON output;
    /// low temperature favours deterministic analysis.
    fn request_body(&self, system: &str, user: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "response_format": { "type": "json_object" },
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(system, user))
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiError { status, body });
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let content = result["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                CompletionError::InvalidResponse(
                    "response has no choices[0].message.content".to_string(),
                )
            })?;

        Ok(content.to_string())
    }
}

/// Mock provider for unit tests
#[cfg(test)]
pub struct MockProvider {
    pub response: String,
}

#[cfg(test)]
#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
        Ok(self.response.clone())
    }
}
