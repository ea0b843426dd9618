//! Review request and verdict types.

use serde::{Deserialize, Serialize};

/// Highest score a verdict can carry.
pub const MAX_SCORE: i64 = 100;

/// A submitted tool to be screened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Name of the submitted tool.
    pub tool_name: String,
    /// URL of the submitted tool.
    pub tool_url: String,
    /// Free-text description, if the submitter provided one.
    pub description: Option<String>,
}

impl ReviewRequest {
    /// Create a review request.
    pub fn new(
        tool_name: impl Into<String>,
        tool_url: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_url: tool_url.into(),
            description,
        }
    }
}

/// A moderation verdict for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the submission looks like a legitimate tool.
    pub is_valid: bool,
    /// Confidence score, 0-100.
    pub score: i64,
    /// Brief explanation of the verdict.
    pub notes: String,
}

impl Verdict {
    /// Create a verdict, clamping the score to 0-100.
    pub fn new(is_valid: bool, score: i64, notes: impl Into<String>) -> Self {
        Self {
            is_valid,
            score: score.clamp(0, MAX_SCORE),
            notes: notes.into(),
        }
    }

    /// The fallback verdict used when the oracle is unavailable.
    ///
    /// It keeps the submission pending at a neutral score so a human can
    /// still decide.
    pub fn manual_review() -> Self {
        Self {
            is_valid: true,
            score: 50,
            notes: "AI validation unavailable, pending manual review".to_string(),
        }
    }
}
