//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::llm::{CompletionProvider, GroqProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Create application state with the Groq-backed provider.
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(GroqProvider::new(&config.analyst));
        Self::with_provider(config, provider)
    }

    /// Create application state with an explicit provider.
    ///
    /// Tests inject stub providers here; production code goes through
    /// [`AppState::new`].
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, provider }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        &self.inner.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalystConfig, ServerConfig};
    use crate::llm::provider::MockProvider;

    #[test]
    fn injected_config_is_reachable_through_state() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8088,
            },
            analyst: AnalystConfig {
                api_key: "test-key".to_string(),
                base_url: "http://localhost:0".to_string(),
                model: "llama-3.3-70b-versatile".to_string(),
                temperature: 0.2,
                max_tokens: 2000,
            },
        };

        let state = AppState::with_provider(
            config,
            Arc::new(MockProvider {
                response: String::new(),
            }),
        );

        assert_eq!(state.config().server.port, 8088);
        assert_eq!(state.config().analyst.model, "llama-3.3-70b-versatile");
    }
}
