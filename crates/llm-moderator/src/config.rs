//! Configuration for the LLM moderator.

use std::env;

use moderator_core::ModerationError;

/// Configuration for [`LlmModerator`](crate::LlmModerator).
#[derive(Debug, Clone)]
pub struct LlmModeratorConfig {
    /// Chat-completions API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens for the verdict.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,
}

impl Default for LlmModeratorConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.x.ai".to_string(),
            api_key: String::new(),
            model: "grok-4-1-fast".to_string(),
            max_tokens: Some(512),
            temperature: Some(0.0),
        }
    }
}

impl LlmModeratorConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MODERATOR_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `MODERATOR_API_URL` - API URL (default: https://api.x.ai)
    /// - `MODERATOR_MODEL` - Model name (default: grok-4-1-fast)
    /// - `MODERATOR_MAX_TOKENS` - Max tokens (default: 512)
    /// - `MODERATOR_TEMPERATURE` - Temperature (default: 0.0)
    pub fn from_env() -> Result<Self, ModerationError> {
        let api_key = env::var("MODERATOR_API_KEY")
            .map_err(|_| ModerationError::Configuration("MODERATOR_API_KEY not set".to_string()))?;

        let api_url =
            env::var("MODERATOR_API_URL").unwrap_or_else(|_| "https://api.x.ai".to_string());

        let model =
            env::var("MODERATOR_MODEL").unwrap_or_else(|_| "grok-4-1-fast".to_string());

        let max_tokens = env::var("MODERATOR_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(512));

        let temperature = env::var("MODERATOR_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(0.0));

        Ok(Self {
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> LlmModeratorConfigBuilder {
        LlmModeratorConfigBuilder::default()
    }
}

/// Builder for [`LlmModeratorConfig`].
#[derive(Debug, Default)]
pub struct LlmModeratorConfigBuilder {
    config: LlmModeratorConfig,
}

impl LlmModeratorConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LlmModeratorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmModeratorConfig::default();

        assert_eq!(config.api_url, "https://api.x.ai");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "grok-4-1-fast");
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.temperature, Some(0.0));
    }

    #[test]
    fn test_builder() {
        let config = LlmModeratorConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .model("grok-4")
            .max_tokens(256)
            .temperature(0.2)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "grok-4");
        assert_eq!(config.max_tokens, Some(256));
        assert_eq!(config.temperature, Some(0.2));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_moderator_vars() {
            std::env::remove_var("MODERATOR_API_KEY");
            std::env::remove_var("MODERATOR_API_URL");
            std::env::remove_var("MODERATOR_MODEL");
            std::env::remove_var("MODERATOR_MAX_TOKENS");
            std::env::remove_var("MODERATOR_TEMPERATURE");
        }

        // Missing API key should error
        clear_all_moderator_vars();
        let result = LlmModeratorConfig::from_env();
        assert!(matches!(result, Err(ModerationError::Configuration(_))));

        // Only API key set, defaults used
        clear_all_moderator_vars();
        std::env::set_var("MODERATOR_API_KEY", "test-env-key");

        let config = LlmModeratorConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, "https://api.x.ai");
        assert_eq!(config.model, "grok-4-1-fast");

        // All vars set
        clear_all_moderator_vars();
        std::env::set_var("MODERATOR_API_KEY", "full-test-key");
        std::env::set_var("MODERATOR_API_URL", "https://test.api.com");
        std::env::set_var("MODERATOR_MODEL", "grok-4");
        std::env::set_var("MODERATOR_MAX_TOKENS", "128");
        std::env::set_var("MODERATOR_TEMPERATURE", "0.5");

        let config = LlmModeratorConfig::from_env().unwrap();
        assert_eq!(config.api_key, "full-test-key");
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "grok-4");
        assert_eq!(config.max_tokens, Some(128));
        assert_eq!(config.temperature, Some(0.5));

        // Cleanup
        clear_all_moderator_vars();
    }
}
