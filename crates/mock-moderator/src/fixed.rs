//! Fixed moderator implementation - always returns the same verdict.

use async_trait::async_trait;

use moderator_core::{ModerationError, Moderator, ReviewRequest, Verdict};

/// A moderator that returns a fixed verdict for every submission.
///
/// Useful for exercising the pipeline's score policies without any AI call.
#[derive(Debug, Clone)]
pub struct FixedModerator {
    verdict: Verdict,
}

impl FixedModerator {
    /// Create a moderator that always returns the given verdict.
    pub fn new(verdict: Verdict) -> Self {
        Self { verdict }
    }

    /// Create a moderator that scores every submission at `score`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_moderator::FixedModerator;
    ///
    /// let moderator = FixedModerator::with_score(10);
    /// // Every review comes back with score 10
    /// ```
    pub fn with_score(score: i64) -> Self {
        Self {
            verdict: Verdict::new(score >= 50, score, "fixed verdict"),
        }
    }
}

#[async_trait]
impl Moderator for FixedModerator {
    async fn review(&self, _request: ReviewRequest) -> Result<Verdict, ModerationError> {
        Ok(self.verdict.clone())
    }

    fn name(&self) -> &str {
        "FixedModerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_verdict() {
        let moderator = FixedModerator::with_score(85);
        let request = ReviewRequest::new("Foo", "https://foo.ai", None);

        let verdict = moderator.review(request).await.unwrap();
        assert!(verdict.is_valid);
        assert_eq!(verdict.score, 85);
    }

    #[tokio::test]
    async fn test_low_score_is_not_valid() {
        let moderator = FixedModerator::with_score(10);
        let request = ReviewRequest::new("Spam", "https://spam.example", None);

        let verdict = moderator.review(request).await.unwrap();
        assert!(!verdict.is_valid);
        assert_eq!(verdict.score, 10);
    }

    #[tokio::test]
    async fn test_moderator_name() {
        let moderator = FixedModerator::with_score(50);
        assert_eq!(moderator.name(), "FixedModerator");
    }
}
