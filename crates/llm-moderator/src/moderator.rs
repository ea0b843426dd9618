//! LlmModerator implementation.

use moderator_core::{async_trait, ModerationError, Moderator, ReviewRequest, Verdict};
use reqwest::Client;
use tracing::debug;

use crate::api_types::{
    ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
};
use crate::config::LlmModeratorConfig;

/// System prompt describing the screening rubric.
const REVIEW_SYSTEM_PROMPT: &str = "\
You are an AI tool validator. Your job is to determine if a submitted tool \
is a legitimate AI tool or service.

Evaluate based on:
1. Is the name appropriate and not offensive?
2. Does the URL look legitimate (not spam, not inappropriate)?
3. Does the description (if provided) describe an AI-related tool?
4. Is this likely a real AI product/service?

Respond with JSON only: {\"isValid\": boolean, \"score\": number (0-100), \
\"notes\": \"brief explanation\"}";

/// A moderation oracle backed by an OpenAI-compatible chat-completions API.
///
/// Each review is a single stateless request: the screening rubric goes in
/// the system prompt, the submission in the user message, and a strict JSON
/// schema constrains the verdict shape.
pub struct LlmModerator {
    client: Client,
    config: LlmModeratorConfig,
}

impl LlmModerator {
    /// Create a new LlmModerator with the given configuration.
    pub fn new(config: LlmModeratorConfig) -> Result<Self, ModerationError> {
        let client = Client::builder().build().map_err(|e| {
            ModerationError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        tracing::info!(
            "LlmModerator initialized with model: {}",
            config.model
        );

        Ok(Self { client, config })
    }

    /// Create an LlmModerator from environment variables.
    ///
    /// See [`LlmModeratorConfig::from_env`] for the variables consumed.
    pub fn from_env() -> Result<Self, ModerationError> {
        let config = LlmModeratorConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LlmModeratorConfig {
        &self.config
    }

    /// Build the messages array for one review.
    fn build_messages(request: &ReviewRequest) -> Vec<ChatMessage> {
        let description = request.description.as_deref().unwrap_or("Not provided");
        let user_content = format!(
            "Validate this tool submission:\nName: {}\nURL: {}\nDescription: {}",
            request.tool_name, request.tool_url, description
        );

        vec![
            ChatMessage::system(REVIEW_SYSTEM_PROMPT),
            ChatMessage::user(user_content),
        ]
    }

    /// Make a chat completion request to the API.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, ModerationError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            response_format: Some(ResponseFormat::verdict_schema()),
        };

        debug!("Sending review request: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ModerationError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(ModerationError::ReviewFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(ModerationError::ReviewFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ModerationError::ReviewFailed(format!("Failed to parse response: {}", e))
        })?;

        debug!("Received review response: {:?}", completion);

        Ok(completion)
    }
}

#[async_trait]
impl Moderator for LlmModerator {
    async fn review(&self, request: ReviewRequest) -> Result<Verdict, ModerationError> {
        debug!(
            "Reviewing submission: {} ({})",
            request.tool_name, request.tool_url
        );

        let messages = Self::build_messages(&request);
        let completion = self.chat_completion(messages).await?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| {
                ModerationError::ReviewFailed("no content in completion".to_string())
            })?;

        let verdict: Verdict = serde_json::from_str(content).map_err(|e| {
            ModerationError::ReviewFailed(format!("Failed to parse verdict: {}", e))
        })?;

        if let Some(usage) = completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        // Untrusted model output: re-clamp through the constructor
        Ok(Verdict::new(verdict.is_valid, verdict.score, verdict.notes))
    }

    fn name(&self) -> &str {
        "LlmModerator"
    }
}
