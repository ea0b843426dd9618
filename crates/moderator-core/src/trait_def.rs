//! The Moderator trait definition.

use async_trait::async_trait;

use crate::error::ModerationError;
use crate::types::{ReviewRequest, Verdict};

/// A trait for screening tool submissions.
///
/// Implementations range from deterministic mocks to full LLM backends.
/// This trait is object-safe and can be used with `Arc<dyn Moderator>`.
#[async_trait]
pub trait Moderator: Send + Sync {
    /// Screen one submission and return a verdict.
    ///
    /// Errors mean the oracle could not produce a verdict at all; callers
    /// decide the fallback policy (the pipeline substitutes
    /// [`Verdict::manual_review`]).
    async fn review(&self, request: ReviewRequest) -> Result<Verdict, ModerationError>;

    /// Get a human-readable name for this moderator implementation.
    fn name(&self) -> &str;
}
