//! Failing moderator implementation - every review errors.

use async_trait::async_trait;

use moderator_core::{ModerationError, Moderator, ReviewRequest, Verdict};

/// A moderator whose reviews always fail.
///
/// Useful for exercising the pipeline's manual-review fallback.
#[derive(Debug, Clone, Default)]
pub struct FailingModerator;

impl FailingModerator {
    /// Create a new FailingModerator.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Moderator for FailingModerator {
    async fn review(&self, _request: ReviewRequest) -> Result<Verdict, ModerationError> {
        Err(ModerationError::Network(
            "mock oracle is unreachable".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "FailingModerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_fails() {
        let moderator = FailingModerator::new();
        let request = ReviewRequest::new("Foo", "https://foo.ai", None);

        let result = moderator.review(request).await;
        assert!(matches!(result, Err(ModerationError::Network(_))));
    }
}
