//! Delayed moderator implementation - adds latency to another moderator.

use std::time::Duration;

use async_trait::async_trait;

use moderator_core::{ModerationError, Moderator, ReviewRequest, Verdict};

/// A moderator that waits before delegating to an inner moderator.
///
/// Useful for exercising the pipeline's review timeout.
pub struct DelayedModerator<M> {
    inner: M,
    delay: Duration,
}

impl<M: Moderator> DelayedModerator<M> {
    /// Wrap `inner` so every review first sleeps for `delay`.
    pub fn new(inner: M, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl<M: Moderator> Moderator for DelayedModerator<M> {
    async fn review(&self, request: ReviewRequest) -> Result<Verdict, ModerationError> {
        tokio::time::sleep(self.delay).await;
        self.inner.review(request).await
    }

    fn name(&self) -> &str {
        "DelayedModerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::FixedModerator;

    #[tokio::test]
    async fn test_delegates_after_delay() {
        let moderator =
            DelayedModerator::new(FixedModerator::with_score(70), Duration::from_millis(10));
        let request = ReviewRequest::new("Foo", "https://foo.ai", None);

        let verdict = moderator.review(request).await.unwrap();
        assert_eq!(verdict.score, 70);
    }
}
