//! Chat-completions API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Structured-output constraint attached to a request.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    /// Format type (always "json_schema" here)
    #[serde(rename = "type")]
    pub format_type: String,
    /// The schema the completion must match
    pub json_schema: JsonSchemaFormat,
}

/// A named, strict JSON schema.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    /// Schema name
    pub name: String,
    /// Whether the model must match the schema exactly
    pub strict: bool,
    /// The JSON schema itself
    pub schema: Value,
}

impl ResponseFormat {
    /// The schema constraining verdicts to `{isValid, score, notes}`.
    pub fn verdict_schema() -> Self {
        Self {
            format_type: "json_schema".to_string(),
            json_schema: JsonSchemaFormat {
                name: "tool_validation".to_string(),
                strict: true,
                schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "isValid": {
                            "type": "boolean",
                            "description": "Whether this is a valid AI tool submission"
                        },
                        "score": {
                            "type": "integer",
                            "description": "Confidence score 0-100"
                        },
                        "notes": {
                            "type": "string",
                            "description": "Brief explanation of the validation result"
                        }
                    },
                    "required": ["isValid", "score", "notes"],
                    "additionalProperties": false
                }),
            },
        }
    }
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model to use
    pub model: String,
    /// Messages in the conversation
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Structured output constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response choices
    pub choices: Vec<Choice>,
    /// Token usage
    pub usage: Option<Usage>,
}

/// A response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The message
    pub message: ResponseMessage,
}

/// The message in a response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Message content, if any
    pub content: Option<String>,
}

/// Token usage accounting.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

/// API error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error detail
    pub error: ApiErrorDetail,
}

/// API error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_unset_options() {
        let request = ChatCompletionRequest {
            model: "grok-4-1-fast".to_string(),
            messages: vec![ChatMessage::user("hi")],
            max_tokens: None,
            temperature: None,
            response_format: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
        assert!(json.get("response_format").is_none());
    }

    #[test]
    fn test_verdict_schema_shape() {
        let format = ResponseFormat::verdict_schema();
        assert_eq!(format.format_type, "json_schema");
        assert!(format.json_schema.strict);

        let required = format.json_schema.schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
    }
}
