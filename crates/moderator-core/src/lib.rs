//! Core trait and types for submission moderation oracles.
//!
//! This crate provides the shared interface for all moderation backends in
//! the Nebula tools directory. It defines:
//!
//! - [`Moderator`] - The trait that all moderation backends implement
//! - [`ReviewRequest`] / [`Verdict`] - Input and output types for a review
//! - [`ModerationError`] - Error types for oracle failures
//!
//! # Example
//!
//! ```rust
//! use moderator_core::{Moderator, ModerationError, ReviewRequest, Verdict};
//! use moderator_core::async_trait;
//!
//! struct AlwaysFine;
//!
//! #[async_trait]
//! impl Moderator for AlwaysFine {
//!     async fn review(&self, _request: ReviewRequest) -> Result<Verdict, ModerationError> {
//!         Ok(Verdict::new(true, 100, "looks great"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "AlwaysFine"
//!     }
//! }
//! ```

mod error;
mod trait_def;
mod types;

pub use error::ModerationError;
pub use trait_def::Moderator;
pub use types::{ReviewRequest, Verdict, MAX_SCORE};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
